/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Edit (delegated to the text widget)
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,
    SelectAll,

    // View
    ToggleLineNumbers,
    ToggleDarkMode,

    // About
    ShowAbout,

    /// Text was inserted into or deleted from the buffer.
    BufferModified,
    /// A transient status message timed out; carries its generation.
    StatusExpired(u64),
}
