// Chunk: docs/chunks/text_buffer - Gap buffer storage with range edits

//! Gap buffer storage for the text buffer.
//!
//! Characters live in a `Vec<char>` with a movable gap. Every edit first moves
//! the gap to the edit offset, so runs of nearby edits (typing, backspacing,
//! undoing the last step) only shift the characters between two offsets.
//!
//! All offsets are logical char offsets; the gap is never visible to callers.

const INITIAL_GAP_SIZE: usize = 64;
const GAP_GROWTH_FACTOR: usize = 2;

/// Char storage with a movable gap.
#[derive(Debug)]
pub struct GapBuffer {
    /// [pre-gap content | gap | post-gap content]
    data: Vec<char>,
    /// First unused slot.
    gap_start: usize,
    /// First used slot after the gap.
    gap_end: usize,
}

impl GapBuffer {
    /// Creates an empty gap buffer.
    pub fn new() -> Self {
        Self {
            data: vec!['\0'; INITIAL_GAP_SIZE],
            gap_start: 0,
            gap_end: INITIAL_GAP_SIZE,
        }
    }

    /// Creates a gap buffer holding `text`, with the gap at the end.
    pub fn from_str(text: &str) -> Self {
        let mut data: Vec<char> = text.chars().collect();
        let len = data.len();
        data.resize(len + INITIAL_GAP_SIZE, '\0');

        Self {
            gap_start: len,
            gap_end: data.len(),
            data,
        }
    }

    /// Logical length in chars.
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Moves the gap to `pos` (clamped to the logical length).
    ///
    /// O(distance between the old and new gap position).
    fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());

        if pos < self.gap_start {
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            let shift = pos - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Grows the gap in place to at least `min_size` slots.
    ///
    /// `gap_start` never moves here; callers rely on the gap staying where
    /// `move_gap_to` put it.
    fn ensure_gap(&mut self, min_size: usize) {
        if self.gap_len() >= min_size {
            return;
        }

        let needed = min_size - self.gap_len();
        let growth = needed.max(self.data.len() * GAP_GROWTH_FACTOR);

        let old_len = self.data.len();
        let post_gap_len = old_len - self.gap_end;
        let new_len = old_len + growth;
        self.data.resize(new_len, '\0');

        if post_gap_len > 0 {
            self.data
                .copy_within(self.gap_end..old_len, new_len - post_gap_len);
        }
        self.gap_end = new_len - post_gap_len;
    }

    /// Inserts `text` at logical offset `pos` (clamped).
    ///
    /// Returns the number of chars inserted.
    pub fn insert_str_at(&mut self, pos: usize, text: &str) -> usize {
        let count = text.chars().count();
        if count == 0 {
            return 0;
        }
        self.move_gap_to(pos);
        self.ensure_gap(count);
        for ch in text.chars() {
            self.data[self.gap_start] = ch;
            self.gap_start += 1;
        }
        count
    }

    /// Removes the chars in `start..end` (clamped) and returns them.
    pub fn delete_range(&mut self, start: usize, end: usize) -> String {
        let end = end.min(self.len());
        let start = start.min(end);
        if start == end {
            return String::new();
        }

        self.move_gap_to(start);
        let removed: String = self.data[self.gap_end..self.gap_end + (end - start)]
            .iter()
            .collect();
        self.gap_end += end - start;
        removed
    }

    /// Iterates over the logical content.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Returns the chars in `start..end` (clamped) as a String.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.len());
        if start >= end {
            return String::new();
        }
        self.chars().skip(start).take(end - start).collect()
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        for ch in self.chars() {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_empty() {
        let buf = GapBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.to_string(), "");
    }

    #[test]
    fn test_from_str() {
        let buf = GapBuffer::from_str("hello");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.to_string(), "hello");
    }

    #[test]
    fn test_insert_at_start_middle_end() {
        let mut buf = GapBuffer::from_str("bd");
        buf.insert_str_at(0, "a");
        buf.insert_str_at(2, "c");
        buf.insert_str_at(4, "e");
        assert_eq!(buf.to_string(), "abcde");
    }

    #[test]
    fn test_insert_clamps_offset() {
        let mut buf = GapBuffer::from_str("abc");
        assert_eq!(buf.insert_str_at(99, "!"), 1);
        assert_eq!(buf.to_string(), "abc!");
    }

    #[test]
    fn test_insert_empty_is_noop() {
        let mut buf = GapBuffer::from_str("abc");
        assert_eq!(buf.insert_str_at(1, ""), 0);
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_insert_multibyte() {
        let mut buf = GapBuffer::from_str("héllo");
        buf.insert_str_at(2, "ü");
        assert_eq!(buf.to_string(), "héüllo");
        assert_eq!(buf.len(), 6);
    }

    #[test]
    fn test_delete_range_returns_removed() {
        let mut buf = GapBuffer::from_str("hello world");
        assert_eq!(buf.delete_range(5, 11), " world");
        assert_eq!(buf.to_string(), "hello");
    }

    #[test]
    fn test_delete_range_clamps_and_ignores_reversed() {
        let mut buf = GapBuffer::from_str("abc");
        assert_eq!(buf.delete_range(2, 1), "");
        assert_eq!(buf.delete_range(1, 99), "bc");
        assert_eq!(buf.to_string(), "a");
    }

    #[test]
    fn test_edits_around_moving_gap() {
        let mut buf = GapBuffer::from_str("abcdef");
        buf.delete_range(0, 1);
        buf.insert_str_at(5, "g");
        buf.delete_range(2, 3);
        buf.insert_str_at(0, "a");
        assert_eq!(buf.to_string(), "abcefg");
    }

    #[test]
    fn test_slice() {
        let mut buf = GapBuffer::from_str("hello world");
        buf.insert_str_at(5, ",");
        assert_eq!(buf.slice(0, 6), "hello,");
        assert_eq!(buf.slice(7, 12), "world");
        assert_eq!(buf.slice(7, 99), "world");
        assert_eq!(buf.slice(4, 4), "");
    }

    #[test]
    fn test_large_insert_grows_gap() {
        let mut buf = GapBuffer::new();
        let text = "abcdefghijklmnopqrstuvwxyz".repeat(40);
        buf.insert_str_at(0, &text);
        buf.insert_str_at(500, "XYZ");
        assert_eq!(buf.len(), 1043);
        assert_eq!(buf.slice(500, 503), "XYZ");
    }
}
