// Chunk: docs/chunks/appkit_shell - NSMenu construction from the menu model
//!
//! Builds the native menu bar from [`crate::menu::menu_bar`].
//!
//! Every item sends `menuCommand:` to the app delegate; the item's tag is the
//! [`MenuCommand`] tag.

use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2::sel;
use objc2_app_kit::{NSEventModifierFlags, NSMenu, NSMenuItem};
use objc2_foundation::{MainThreadMarker, NSString};

use crate::commands::MenuCommand;
use crate::menu::{menu_bar, MenuItem};

fn native_item(mtm: MainThreadMarker, item: &MenuItem, target: &AnyObject) -> Retained<NSMenuItem> {
    let key = item.key.map(|k| k.key.to_string()).unwrap_or_default();
    // SAFETY: `menuCommand:` is implemented by the target with a matching signature.
    let native = unsafe {
        NSMenuItem::initWithTitle_action_keyEquivalent(
            mtm.alloc(),
            &NSString::from_str(item.label),
            Some(sel!(menuCommand:)),
            &NSString::from_str(&key),
        )
    };
    if let Some(k) = item.key {
        let mut modifiers = NSEventModifierFlags::Command;
        if k.shift {
            modifiers |= NSEventModifierFlags::Shift;
        }
        native.setKeyEquivalentModifierMask(modifiers);
    }
    native.setTag(item.command.tag());
    // SAFETY: the target is the app delegate, which outlives the menu.
    unsafe { native.setTarget(Some(target)) };
    native
}

fn submenu(mtm: MainThreadMarker, title: &str, items: Vec<Retained<NSMenuItem>>) -> Retained<NSMenuItem> {
    let title = NSString::from_str(title);
    let menu = NSMenu::initWithTitle(mtm.alloc(), &title);
    for item in items {
        menu.addItem(&item);
    }
    let holder = NSMenuItem::new(mtm);
    holder.setTitle(&title);
    holder.setSubmenu(Some(&menu));
    holder
}

/// Creates the main menu: an application menu followed by File, Edit, Help.
pub fn build(mtm: MainThreadMarker, app_name: &str, target: &AnyObject) -> Retained<NSMenu> {
    let bar = NSMenu::new(mtm);

    // macOS always titles the first menu with the application name.
    let about = native_item(
        mtm,
        &MenuItem {
            label: "About EditX",
            command: MenuCommand::About,
            key: None,
            separator_after: false,
        },
        target,
    );
    bar.addItem(&submenu(mtm, app_name, vec![about]));

    for menu in menu_bar() {
        let mut items = Vec::with_capacity(menu.items.len() * 2);
        for item in &menu.items {
            items.push(native_item(mtm, item, target));
            if item.separator_after {
                items.push(NSMenuItem::separatorItem(mtm));
            }
        }
        bar.addItem(&submenu(mtm, menu.title, items));
    }

    bar
}
