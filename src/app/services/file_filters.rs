/// Filter for the open/save dialogs: plain text files.
///
/// FLTK native chooser format is "Description\tPattern", one filter per line.
/// FLTK appends its own "All Files" entry on most platforms.
pub const TEXT_FILES_FILTER: &str = "Text Files\t*.txt";

/// File name offered by the save dialogs when the document has no path yet.
pub const DEFAULT_NEW_FILE_NAME: &str = "NewFile.txt";

/// Name to preset in a save dialog: the current file name, or the default.
pub fn preset_file_name(current: Option<&std::path::Path>) -> String {
    current
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| DEFAULT_NEW_FILE_NAME.to_string())
}
