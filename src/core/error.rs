//! Generation errors
//!
//! Every variant except `Io` is a violated precondition: either the corpus
//! handed over by the reader breaks its contract, or an internal invariant
//! failed. None of them are transient, and generation never writes partial
//! output when one occurs.

use std::fmt;
use std::io;

/// Error aborting a generation run
#[derive(Debug)]
pub enum GenerateError {
    /// The corpus contained no words
    EmptyCorpus,
    /// A dispatch node was asked to choose a column for zero candidates
    NoCandidates,
    /// Several candidates remain but every column has been tested
    ///
    /// This only happens when the corpus contains the same word twice, which
    /// the word-list reader must never supply.
    ColumnsExhausted { length: usize, words: Vec<String> },
    /// Writing the rendered code to the sink failed
    Io(io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorpus => write!(f, "Reserved word list is empty"),
            Self::NoCandidates => write!(f, "Cannot select a column without candidates"),
            Self::ColumnsExhausted { length, words } => write!(
                f,
                "All {length} columns tested but {} candidates remain ({}); duplicate words?",
                words.len(),
                words.join(", ")
            ),
            Self::Io(e) => write!(f, "Failed to write generated code: {e}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GenerateError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
