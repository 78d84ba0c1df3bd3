//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Document store, settings, messages
//! - `controllers/` - Layout and drag-and-drop state machines
//! - `services/` - Markdown rendering, text helpers
//! - `infrastructure/` - FLTK glue, errors, logging
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

pub use controllers::dragdrop::{DragDropIngester, DroppedFile};
pub use controllers::layout::{LayoutController, PanelWidths};
pub use domain::{AppSettings, DocumentStore, Message};
pub use infrastructure::error::{AppError, IngestError};
pub use services::render::MarkdownRenderer;
