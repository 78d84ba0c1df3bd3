//! Infrastructure layer - external integrations and utilities.
//!
//! - FLTK buffer access
//! - FLTK implementations of the controller seams (pointer grab, read sink)
//! - Error types
//! - Logging setup

pub mod buffer;
pub mod error;
pub mod events;
pub mod logging;
