// Chunk: docs/chunks/menu_model - Platform-neutral menu bar layout

//! Menu bar model.
//!
//! Describes the File, Edit and Help menus as plain data. The macOS shell
//! turns this into `NSMenu`s; tests check the layout directly.

use crate::commands::MenuCommand;

/// A keyboard shortcut: the Command key plus `key`, optionally with Shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEquivalent {
    /// Lowercase character sent with Command.
    pub key: char,
    pub shift: bool,
}

impl KeyEquivalent {
    const fn cmd(key: char) -> Self {
        Self { key, shift: false }
    }

    const fn cmd_shift(key: char) -> Self {
        Self { key, shift: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub command: MenuCommand,
    pub key: Option<KeyEquivalent>,
    /// Draw a separator below this item.
    pub separator_after: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub items: Vec<MenuItem>,
}

fn item(label: &'static str, command: MenuCommand, key: Option<KeyEquivalent>) -> MenuItem {
    MenuItem {
        label,
        command,
        key,
        separator_after: false,
    }
}

fn separated(mut item: MenuItem) -> MenuItem {
    item.separator_after = true;
    item
}

/// The menu bar, left to right.
pub fn menu_bar() -> Vec<Menu> {
    use MenuCommand::*;

    vec![
        Menu {
            title: "File",
            items: vec![
                item("New", New, Some(KeyEquivalent::cmd('n'))),
                item("Open...", Open, Some(KeyEquivalent::cmd('o'))),
                item("Save", Save, Some(KeyEquivalent::cmd('s'))),
                separated(item("Save As...", SaveAs, Some(KeyEquivalent::cmd_shift('s')))),
                item("Exit", Exit, Some(KeyEquivalent::cmd('q'))),
            ],
        },
        Menu {
            title: "Edit",
            items: vec![
                item("Undo", Undo, Some(KeyEquivalent::cmd('z'))),
                separated(item("Redo", Redo, Some(KeyEquivalent::cmd_shift('z')))),
                item("Cut", Cut, Some(KeyEquivalent::cmd('x'))),
                item("Copy", Copy, Some(KeyEquivalent::cmd('c'))),
                separated(item("Paste", Paste, Some(KeyEquivalent::cmd('v')))),
                item("Select All", SelectAll, Some(KeyEquivalent::cmd('a'))),
                item("Clear All", ClearAll, None),
            ],
        },
        Menu {
            title: "Help",
            items: vec![item("About EditX", About, None)],
        },
    ]
}
