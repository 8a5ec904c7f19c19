//! Cursor context detection and mutation.
//!
//! This module provides:
//! - `detect` to find the date, checkbox or TODO-keyword token under a cursor
//! - `mutate` to compute the replacement text for a detected token
//! - `KeywordSet` for the configurable ordered TODO keyword list
//! - date token arithmetic backed by chrono

pub mod datetime;
mod detect;
mod keywords;
mod mutate;

pub use detect::{detect, DetectedContext, Span, TokenKind};
pub use keywords::{KeywordSet, DEFAULT_KEYWORDS};
pub use mutate::{mutate, Direction, CHECKBOX_STATES};
