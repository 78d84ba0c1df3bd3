use crate::app::controllers::dragdrop::{DroppedFile, FileRead};

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and worker threads send these; the dispatch loop in
/// main hands them to `AppState`.
#[derive(Debug)]
pub enum Message {
    // Status bar
    ToggleEditor,
    TogglePreview,
    ClearDocument,

    // Editor
    EditorChanged,

    // Divider drag, x in window coordinates
    ResizeBegin,
    ResizeMove(i32),
    ResizeEnd,

    // Drop surface
    DragEnter,
    DragOver,
    DragLeave,
    Drop(Vec<DroppedFile>),

    // Worker threads
    FileRead(FileRead),

    WindowResized,
    WindowClose,
}
