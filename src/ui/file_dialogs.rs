use std::path::PathBuf;

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::file_filters::TEXT_FILES_FILTER;

fn run_chooser(
    kind: FileDialogType,
    title: &str,
    directory: Option<&str>,
    preset: Option<&str>,
) -> Result<Option<PathBuf>> {
    let is_save = matches!(kind, FileDialogType::BrowseSaveFile);
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(TEXT_FILES_FILTER);
    if is_save {
        nfc.set_option(FileDialogOptions::SaveAsConfirm);
    }
    if let Some(dir) = directory {
        if let Err(e) = nfc.set_directory(&dir) {
            tracing::debug!("Ignoring dialog start directory {}: {}", dir, e);
        }
    }
    if let Some(name) = preset {
        nfc.set_preset_file(name);
    }

    nfc.show(); // blocks until close

    let filename = nfc.filename();
    if !filename.as_os_str().is_empty() {
        return Ok(Some(filename));
    }
    // An empty filename is either a cancel or a chooser failure.
    match nfc.error_message() {
        Some(msg) if !msg.is_empty() && msg != "No error" => Err(AppError::Dialog(msg)),
        _ => Ok(None),
    }
}

pub fn native_open_dialog(directory: Option<&str>) -> Result<Option<PathBuf>> {
    run_chooser(FileDialogType::BrowseFile, "Open File", directory, None)
}

pub fn native_save_dialog(title: &str, directory: Option<&str>, preset: &str) -> Result<Option<PathBuf>> {
    run_chooser(FileDialogType::BrowseSaveFile, title, directory, Some(preset))
}
