use std::path::{Path, PathBuf};

use fltk::{
    app::{self, Sender},
    dialog,
    draw,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::domain::document::Document;
use super::domain::messages::Message;
use super::domain::settings::{AppSettings, ThemeMode};
use super::infrastructure::buffer::{buffer_line_count, buffer_text_no_leak};
use super::services::file_filters::{preset_file_name, DEFAULT_NEW_FILE_NAME};
use super::services::file_io::{open_text_file, write_text_file};
use super::services::gutter::LineNumberGutter;
use super::services::status::{self, StatusLine};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::{set_menu_checkbox, DARK_MODE_ITEM, LINE_NUMBERS_ITEM};
use crate::ui::status_bar::StatusBar;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

pub struct AppState {
    pub document: Document,
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub status_bar: StatusBar,
    pub sender: Sender<Message>,
    pub settings: AppSettings,
    pub dark_mode: bool,
    gutter: LineNumberGutter,
    status: StatusLine,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: AppSettings,
        dark_mode: bool,
        show_linenumbers: bool,
    ) -> Self {
        let MainWidgets { wind, menu, mut text_editor, status_bar, .. } = widgets;

        let document = Document::new(sender);
        text_editor.set_buffer(document.buffer.clone());

        // Real glyph advance is measured once the window is shown.
        let estimated_advance = settings.font_size as f64 * 0.6;
        let gutter = LineNumberGutter::new(show_linenumbers, estimated_advance);

        Self {
            document,
            editor: text_editor,
            window: wind,
            menu,
            status_bar,
            sender,
            settings,
            dark_mode,
            gutter,
            status: StatusLine::new(),
        }
    }

    /// Apply font, colours and gutter width. Call after the window is shown.
    pub fn apply_appearance(&mut self) {
        let font = self.settings.font.to_fltk();
        let size = self.settings.font_size as i32;
        self.editor.set_text_font(font);
        self.editor.set_text_size(size);
        self.editor.set_linenumber_font(font);
        self.editor.set_linenumber_size(size);

        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.menu,
            &mut self.status_bar,
            self.dark_mode,
        );
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, self.dark_mode);

        draw::set_font(font, size);
        let advance = draw::width("9");
        tracing::debug!(advance, "measured gutter digit advance");
        self.gutter.on_line_count(buffer_line_count(&self.document.buffer));
        let width = self.gutter.set_digit_advance(advance);
        self.editor.set_linenumber_width(width);

        self.update_window_title();
        self.refresh_status();
        self.editor.redraw();
    }

    pub fn update_window_title(&mut self) {
        self.window.set_label(&self.document.window_title());
    }

    fn refresh_status(&mut self) {
        let text = self.status.text().to_string();
        self.status_bar.set_text(&text);
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.settings.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
    }

    fn set_file_path(&mut self, path: Option<PathBuf>) {
        self.status.set_file(path.as_deref());
        self.document.file_path = path;
        self.update_window_title();
        self.refresh_status();
    }

    // --- Status bar ---

    /// Show a transient message; it reverts to the file label after the timeout.
    pub fn show_status(&mut self, message: String) {
        tracing::info!("status: {}", message);
        let generation = self.status.show_message(message);
        self.refresh_status();

        let s = self.sender;
        let secs = self.settings.status_timeout_ms as f64 / 1000.0;
        app::add_timeout3(secs, move |_| s.send(Message::StatusExpired(generation)));
    }

    pub fn on_status_expired(&mut self, generation: u64) {
        if self.status.expire(generation) {
            self.refresh_status();
        }
    }

    // --- Buffer changes ---

    pub fn on_buffer_modified(&mut self) {
        let lines = buffer_line_count(&self.document.buffer);
        if let Some(width) = self.gutter.on_line_count(lines) {
            tracing::debug!(lines, width, "gutter width changed");
            self.editor.set_linenumber_width(width);
            self.editor.redraw();
        }
        self.update_window_title();
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        let dir = self.settings.last_open_directory.clone();
        match native_save_dialog("Create a new file", dir.as_deref(), DEFAULT_NEW_FILE_NAME) {
            Ok(Some(path)) => {
                self.remember_directory(&path);
                self.document.reset(Some(path.clone()));
                self.set_file_path(Some(path));
            }
            Ok(None) => {}
            Err(e) => self.show_status(status::new_file_error_message(&e)),
        }
    }

    pub fn file_open(&mut self) {
        let dir = self.settings.last_open_directory.clone();
        match native_open_dialog(dir.as_deref()) {
            Ok(Some(path)) => self.open_file(path),
            Ok(None) => {}
            Err(e) => self.show_status(status::open_error_message(&e)),
        }
    }

    pub fn open_file(&mut self, path: PathBuf) {
        match open_text_file(&path, &mut self.settings.last_open_directory) {
            Ok(content) => {
                self.document.load(path.clone(), &content);
                self.editor.set_insert_position(0);
                self.editor.show_insert_position();
                let message = status::opened_message(&path);
                self.set_file_path(Some(path));
                self.show_status(message);
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", path.display(), e);
                self.show_status(status::open_error_message(&e));
            }
        }
    }

    pub fn file_save(&mut self) {
        let Some(path) = self.document.file_path.clone() else {
            self.file_save_as();
            return;
        };
        let text = buffer_text_no_leak(&self.document.buffer);
        match write_text_file(&path, &text) {
            Ok(()) => {
                self.document.mark_clean();
                self.update_window_title();
                self.show_status(status::saved_message(&path));
            }
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", path.display(), e);
                self.show_status(status::save_error_message(&e));
            }
        }
    }

    pub fn file_save_as(&mut self) {
        let dir = self.settings.last_open_directory.clone();
        let preset = preset_file_name(self.document.file_path.as_deref());
        let path = match native_save_dialog("Save File", dir.as_deref(), &preset) {
            Ok(Some(path)) => path,
            Ok(None) => return,
            Err(e) => {
                self.show_status(status::save_error_message(&e));
                return;
            }
        };

        self.remember_directory(&path);
        let text = buffer_text_no_leak(&self.document.buffer);
        match write_text_file(&path, &text) {
            Ok(()) => {
                self.document.mark_clean();
                self.set_file_path(Some(path.clone()));
                self.show_status(status::saved_message(&path));
            }
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", path.display(), e);
                self.show_status(status::save_error_message(&e));
            }
        }
    }

    /// Handle a quit request. Returns `true` if the app should exit.
    pub fn file_quit(&mut self) -> bool {
        let should_quit = if self.document.is_dirty() {
            let choice = dialog::choice2_default(
                "You have unsaved changes.",
                "Save",
                "Quit Without Saving",
                "Cancel",
            );
            match choice {
                Some(0) => {
                    self.file_save();
                    !self.document.is_dirty()
                }
                Some(1) => true,
                _ => false,
            }
        } else {
            true
        };

        if should_quit {
            if let Err(e) = self.settings.save() {
                tracing::warn!("Failed to save settings: {}", e);
            }
        }
        should_quit
    }

    // --- Edit (the widget owns undo history and the clipboard) ---

    pub fn edit_undo(&mut self) {
        self.editor.undo();
    }

    pub fn edit_redo(&mut self) {
        self.editor.redo();
    }

    pub fn edit_cut(&mut self) {
        self.editor.cut();
    }

    pub fn edit_copy(&mut self) {
        self.editor.copy();
    }

    pub fn edit_paste(&mut self) {
        self.editor.paste();
    }

    pub fn select_all(&mut self) {
        let len = self.document.buffer.length();
        self.document.buffer.select(0, len);
    }

    // --- View ---

    pub fn toggle_line_numbers(&mut self) {
        let width = self.gutter.toggle();
        self.editor.set_linenumber_width(width);
        self.editor.redraw();
        let visible = self.gutter.is_visible();
        set_menu_checkbox(&self.menu, LINE_NUMBERS_ITEM, visible);
        tracing::debug!(visible, width, "line numbers toggled");
        if let Err(e) = self.settings.set_line_numbers(visible) {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.menu,
            &mut self.status_bar,
            self.dark_mode,
        );
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, self.dark_mode);
        set_menu_checkbox(&self.menu, DARK_MODE_ITEM, self.dark_mode);
        self.settings.theme_mode = if self.dark_mode { ThemeMode::Dark } else { ThemeMode::Light };
    }

    // --- About ---

    pub fn show_about(&self) {
        show_about_dialog(self.dark_mode);
    }
}
