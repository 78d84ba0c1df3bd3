//! Domain layer - core data structures and types.
//!
//! - The document store and the welcome sample it starts with
//! - Application settings
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod sample;
pub mod settings;

pub use document::{DEFAULT_FILE_NAME, DocumentStore};
pub use messages::Message;
pub use settings::{AppSettings, SyntaxTheme};
