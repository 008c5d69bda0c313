use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use super::messages::Message;

pub const APP_NAME: &str = "Gapp Text Editor";
pub const UNTITLED: &str = "Untitled";
pub const NO_FILE_OPEN: &str = "No file open";

/// The one document shown in the editor.
pub struct Document {
    pub buffer: TextBuffer,
    pub file_path: Option<PathBuf>,
    pub has_unsaved_changes: Rc<Cell<bool>>,
}

impl Document {
    pub fn new(sender: Sender<Message>) -> Self {
        let mut buffer = TextBuffer::default();
        buffer.can_undo(true);

        let has_unsaved_changes = Rc::new(Cell::new(false));
        let changes = has_unsaved_changes.clone();
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                changes.set(true);
                sender.send(Message::BufferModified);
            }
        });

        Self {
            buffer,
            file_path: None,
            has_unsaved_changes,
        }
    }

    /// Replace the whole text and adopt `path`. The result is clean.
    pub fn load(&mut self, path: PathBuf, content: &str) {
        self.buffer.set_text(content);
        self.file_path = Some(path);
        self.mark_clean();
    }

    /// Empty the buffer and adopt `path` (if any). The result is clean.
    pub fn reset(&mut self, path: Option<PathBuf>) {
        self.buffer.set_text("");
        self.file_path = path;
        self.mark_clean();
    }

    pub fn is_dirty(&self) -> bool {
        self.has_unsaved_changes.get()
    }

    pub fn mark_clean(&self) {
        self.has_unsaved_changes.set(false);
    }

    pub fn window_title(&self) -> String {
        window_title(self.file_path.as_deref(), self.is_dirty())
    }
}

/// File name component of `path`, or "Untitled" when there is none.
pub fn display_name(path: Option<&Path>) -> String {
    path.and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Text of the permanent status bar label.
pub fn file_label(path: Option<&Path>) -> String {
    match path {
        Some(p) if !p.as_os_str().is_empty() => p.display().to_string(),
        _ => NO_FILE_OPEN.to_string(),
    }
}

pub fn window_title(path: Option<&Path>, dirty: bool) -> String {
    let prefix = if dirty { "*" } else { "" };
    format!("{}{} - {}", prefix, display_name(path), APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_path() {
        let path = PathBuf::from("/home/user/notes.txt");
        assert_eq!(display_name(Some(path.as_path())), "notes.txt");
        assert_eq!(display_name(Some(Path::new("relative.txt"))), "relative.txt");
    }

    #[test]
    fn test_display_name_without_path() {
        assert_eq!(display_name(None), "Untitled");
        assert_eq!(display_name(Some(Path::new("/"))), "Untitled");
    }

    #[test]
    fn test_file_label() {
        assert_eq!(file_label(None), "No file open");
        assert_eq!(file_label(Some(Path::new(""))), "No file open");
        assert_eq!(
            file_label(Some(Path::new("/tmp/draft.txt"))),
            "/tmp/draft.txt"
        );
    }

    #[test]
    fn test_window_title_clean_and_dirty() {
        let path = PathBuf::from("/tmp/draft.txt");
        assert_eq!(window_title(Some(path.as_path()), false), "draft.txt - Gapp Text Editor");
        assert_eq!(window_title(Some(path.as_path()), true), "*draft.txt - Gapp Text Editor");
        assert_eq!(window_title(None, false), "Untitled - Gapp Text Editor");
        assert_eq!(window_title(None, true), "*Untitled - Gapp Text Editor");
    }
}
