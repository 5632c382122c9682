// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! Integration tests for realistic editing sequences.
//!
//! These tests drive the buffer only through the `EditableText` capability
//! interface, the same way the editor's Edit menu does, and check the content
//! against a plain `String` model.

use editx_buffer::{EditableText, TextBuffer};

#[test]
fn test_type_word_then_delete_entirely() {
    let mut buf = TextBuffer::new();

    for (i, ch) in "hello".chars().enumerate() {
        buf.insert_at(i, &ch.to_string());
    }
    assert_eq!(buf.read_all(), "hello");
    assert_eq!(buf.cursor(), 5);

    for end in (1..=5).rev() {
        buf.delete_range(end - 1..end);
    }
    assert!(buf.is_empty());
    assert_eq!(buf.cursor(), 0);
}

#[test]
fn test_undo_everything_then_redo_everything() {
    let mut buf = TextBuffer::new();
    buf.insert_at(0, "first line\n");
    buf.insert_at(11, "second line\n");
    buf.delete_range(0..6);
    buf.insert_at(0, "1st ");

    let final_content = buf.read_all();
    assert_eq!(final_content, "1st line\nsecond line\n");

    let mut undone = 0;
    while buf.undo() {
        undone += 1;
    }
    assert_eq!(undone, 4);
    assert!(buf.is_empty());

    while buf.redo() {}
    assert_eq!(buf.read_all(), final_content);
}

#[test]
fn test_matches_string_model_through_mixed_edits() {
    let mut buf = TextBuffer::new();
    let mut model = String::new();

    let ops: &[(&str, usize, usize)] = &[
        ("insert", 0, 0),
        ("insert", 3, 0),
        ("delete", 1, 4),
        ("insert", 2, 0),
        ("delete", 0, 2),
        ("insert", 1, 0),
    ];
    let texts = ["abcdef", "XYZ", "", "ümlaut", "", "→"];

    for (&(op, at, end), text) in ops.iter().zip(texts) {
        match op {
            "insert" => {
                buf.insert_at(at, text);
                let byte = model.char_indices().nth(at).map_or(model.len(), |(b, _)| b);
                model.insert_str(byte, text);
            }
            _ => {
                buf.delete_range(at..end);
                let chars: Vec<char> = model.chars().collect();
                model = chars[..at].iter().chain(&chars[end..]).collect();
            }
        }
        assert_eq!(buf.read_all(), model);
    }
}

#[test]
fn test_cut_paste_round_trip_is_two_undo_steps() {
    let mut buf = TextBuffer::new();
    buf.insert_at(0, "alpha beta gamma");

    buf.select(6..11);
    assert!(buf.cut());
    assert_eq!(buf.read_all(), "alpha gamma");

    buf.set_cursor(0);
    assert!(buf.paste());
    assert_eq!(buf.read_all(), "beta alpha gamma");

    assert!(buf.undo());
    assert_eq!(buf.read_all(), "alpha gamma");
    assert!(buf.undo());
    assert_eq!(buf.read_all(), "alpha beta gamma");
}

#[test]
fn test_select_all_then_paste_replaces_everything() {
    let mut buf = TextBuffer::new();
    buf.insert_at(0, "keep");
    buf.select_all();
    buf.copy();

    buf.load("old document text");
    buf.select_all();
    assert!(buf.paste());
    assert_eq!(buf.read_all(), "keep");
}

#[test]
fn test_clear_all_after_load_then_undo_restores_loaded_text() {
    let mut buf = TextBuffer::new();
    buf.load("from disk");
    buf.clear_all();
    assert!(buf.is_empty());
    assert!(buf.undo());
    assert_eq!(buf.read_all(), "from disk");
    // load itself is not undoable
    assert!(!buf.undo());
}
