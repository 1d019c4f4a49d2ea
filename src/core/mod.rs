//! Core domain types for reserved-word recognition
//!
//! This module contains the fundamental types shared by the tree builder and
//! the code emitter. Nothing here knows about output formats.

mod columns;
mod error;
mod word;

pub use columns::ColumnSet;
pub use error::GenerateError;
pub use word::{ReservedWord, WordError};
