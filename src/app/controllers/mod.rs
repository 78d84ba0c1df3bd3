//! Controllers layer - the interactive state machines.
//!
//! - Split layout and divider drag
//! - Drag-and-drop validation and file ingestion

pub mod dragdrop;
pub mod layout;
