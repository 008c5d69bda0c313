//! Status bar text: a permanent file label plus at most one transient
//! message that expires after a timeout.

use std::path::Path;

use crate::app::domain::document::file_label;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    file_label: String,
    transient: Option<String>,
    generation: u64,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            file_label: file_label(None),
            transient: None,
            generation: 0,
        }
    }

    pub fn set_file(&mut self, path: Option<&Path>) {
        self.file_label = file_label(path);
    }

    /// Show `message` until `expire` is called with the returned generation.
    pub fn show_message(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.transient = Some(message.into());
        self.generation
    }

    /// Drop the transient message if it is still the one from `generation`.
    /// Returns true when the visible text changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.transient.is_none() {
            return false;
        }
        self.transient = None;
        true
    }

    pub fn text(&self) -> &str {
        self.transient.as_deref().unwrap_or(&self.file_label)
    }
}

pub fn opened_message(path: &Path) -> String {
    format!("Opened: {}", path.display())
}

pub fn saved_message(path: &Path) -> String {
    format!("Saved: {}", path.display())
}

pub fn open_error_message(err: &impl std::fmt::Display) -> String {
    format!("Error opening file: {}", err)
}

pub fn save_error_message(err: &impl std::fmt::Display) -> String {
    format!("Error saving file: {}", err)
}

pub fn new_file_error_message(err: &impl std::fmt::Display) -> String {
    format!("Error creating new file: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_no_file_label() {
        let status = StatusLine::new();
        assert_eq!(status.text(), "No file open");
    }

    #[test]
    fn test_transient_message_then_expiry() {
        let mut status = StatusLine::new();
        status.set_file(Some(Path::new("/tmp/a.txt")));
        let generation = status.show_message("Opened: /tmp/a.txt");
        assert_eq!(status.text(), "Opened: /tmp/a.txt");

        assert!(status.expire(generation));
        assert_eq!(status.text(), "/tmp/a.txt");
        assert!(!status.expire(generation));
    }

    #[test]
    fn test_stale_expiry_keeps_newer_message() {
        let mut status = StatusLine::new();
        let first = status.show_message("Error saving file: denied");
        let second = status.show_message("Saved: /tmp/b.txt");

        assert!(!status.expire(first));
        assert_eq!(status.text(), "Saved: /tmp/b.txt");
        assert!(status.expire(second));
        assert_eq!(status.text(), "No file open");
    }

    #[test]
    fn test_file_change_under_message() {
        let mut status = StatusLine::new();
        let generation = status.show_message("Opened: /x/y.txt");
        status.set_file(Some(Path::new("/x/y.txt")));
        assert_eq!(status.text(), "Opened: /x/y.txt");
        assert!(status.expire(generation));
        assert_eq!(status.text(), "/x/y.txt");
    }

    #[test]
    fn test_message_formats() {
        let path = Path::new("/tmp/n.txt");
        assert_eq!(opened_message(path), "Opened: /tmp/n.txt");
        assert_eq!(saved_message(path), "Saved: /tmp/n.txt");
        assert_eq!(open_error_message(&"boom"), "Error opening file: boom");
        assert_eq!(save_error_message(&"boom"), "Error saving file: boom");
        assert_eq!(new_file_error_message(&"boom"), "Error creating new file: boom");
    }
}
