//! Plain UTF-8 file reading and writing.

use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::Result;

/// Read a whole file as UTF-8. Invalid UTF-8 is an `InvalidData` I/O error.
pub fn read_text_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "file read");
    Ok(content)
}

/// Read `path` like `read_text_file`; only a successful read records its
/// parent directory in `last_directory`.
pub fn open_text_file(path: &Path, last_directory: &mut Option<String>) -> Result<String> {
    let content = read_text_file(path)?;
    if let Some(parent) = path.parent() {
        *last_directory = Some(parent.to_string_lossy().to_string());
    }
    Ok(content)
}

/// Write `text` as UTF-8, creating or truncating the file.
pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text.as_bytes())?;
    tracing::info!(path = %path.display(), bytes = text.len(), "file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;

    #[test]
    fn test_write_then_read_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let text = "line one\nzweite Zeile \u{00fc}\n\u{1f980}\n";

        write_text_file(&path, text).unwrap();
        assert_eq!(fs::read(&path).unwrap(), text.as_bytes());
        assert_eq!(read_text_file(&path).unwrap(), text);
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        fs::write(&path, "a much longer previous body").unwrap();

        write_text_file(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text_file(&dir.path().join("missing.txt")).unwrap_err();
        match err {
            AppError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_invalid_utf8_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [0x63, 0x61, 0x66, 0xe9]).unwrap();

        let err = read_text_file(&path).unwrap_err();
        match err {
            AppError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_open_records_directory_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        fs::write(&path, "hello").unwrap();

        let mut last_directory = None;
        assert_eq!(open_text_file(&path, &mut last_directory).unwrap(), "hello");
        assert_eq!(last_directory, Some(dir.path().to_string_lossy().to_string()));
    }

    #[test]
    fn test_failed_open_keeps_previous_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("elsewhere").join("missing.txt");

        let mut last_directory = Some("/home/user/docs".to_string());
        assert!(open_text_file(&missing, &mut last_directory).is_err());
        assert_eq!(last_directory.as_deref(), Some("/home/user/docs"));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("note.txt");
        assert!(write_text_file(&path, "x").is_err());
    }
}
