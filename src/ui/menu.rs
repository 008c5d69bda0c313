use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::document::APP_NAME;
use crate::app::domain::messages::Message;

pub const LINE_NUMBERS_ITEM: &str = "View/Show Line Numbers";
pub const DARK_MODE_ITEM: &str = "View/Dark Mode";

fn toggle_flag(checked: bool) -> MenuFlag {
    if checked { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle }
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, line_numbers: bool, dark_mode: bool) {
    let s = sender;

    // File
    menu.add("File/New...", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Undo", Shortcut::Ctrl | 'z', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditUndo) });
    menu.add("Edit/Redo", Shortcut::Ctrl | Shortcut::Shift | 'z', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditRedo) });
    menu.add("Edit/Cut", Shortcut::Ctrl | 'x', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCut) });
    menu.add("Edit/Copy", Shortcut::Ctrl | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCopy) });
    menu.add("Edit/Paste", Shortcut::Ctrl | 'v', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditPaste) });
    menu.add("Edit/Select All", Shortcut::Ctrl | 'a', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SelectAll) });

    // View
    menu.add(LINE_NUMBERS_ITEM, Shortcut::None, toggle_flag(line_numbers), { let s = *s; move |_| s.send(Message::ToggleLineNumbers) });
    menu.add(DARK_MODE_ITEM, Shortcut::None, toggle_flag(dark_mode), { let s = *s; move |_| s.send(Message::ToggleDarkMode) });

    // About
    let about_item = format!("About/About {}", APP_NAME);
    menu.add(&about_item, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

/// Set or clear the check mark of a toggle item.
pub fn set_menu_checkbox(menu: &MenuBar, path: &str, checked: bool) {
    let idx = menu.find_index(path);
    if idx < 0 {
        tracing::warn!("Menu item not found: {}", path);
        return;
    }
    if let Some(mut item) = menu.at(idx) {
        if checked {
            item.set();
        } else {
            item.clear();
        }
    }
}
