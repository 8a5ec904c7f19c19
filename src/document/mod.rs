//! Document state management and text utilities.
//!
//! This module provides:
//! - `LineIndex` for byte offset <-> LSP position conversion and line access
//! - `DocumentState` and `DocumentStore` for document lifecycle management

mod state;
mod text;

pub use state::{DocumentState, DocumentStore};
pub use text::LineIndex;
