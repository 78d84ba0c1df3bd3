//! Services layer - stateless operations.
//!
//! - Markdown rendering with code highlighting
//! - Path and text helpers

pub mod render;
pub mod text_ops;
