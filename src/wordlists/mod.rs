//! Reserved word lists
//!
//! Provides the embedded default list and the reader for external lists.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_ENTRIES, DEFAULT_ENTRIES_COUNT};
