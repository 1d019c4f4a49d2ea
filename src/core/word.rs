//! Reserved word representation
//!
//! A `ReservedWord` pairs the index assigned by the word-list reader with the
//! word's text. The text is validated once at construction so the generator can
//! treat every byte as a lowercase ASCII letter.

use std::fmt;

/// A reserved word and the index the reader assigned to it
///
/// Indices are never reordered by the generator; they only need to be unique
/// per distinct word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReservedWord {
    index: u32,
    text: String,
}

/// Error type for invalid reserved words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Reserved word must not be empty"),
            Self::NonAscii => write!(f, "Reserved word must contain only ASCII letters"),
            Self::InvalidCharacters => {
                write!(f, "Reserved word must contain only lowercase letters")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl ReservedWord {
    /// Create a new reserved word
    ///
    /// Unlike identifiers, reserved words are case-sensitive: `"If"` is rejected
    /// rather than folded.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains anything other than lowercase ASCII letters
    ///
    /// # Examples
    /// ```
    /// use reserved_switch::core::ReservedWord;
    ///
    /// let word = ReservedWord::new(7, "while").unwrap();
    /// assert_eq!(word.index(), 7);
    /// assert_eq!(word.text(), "while");
    ///
    /// assert!(ReservedWord::new(0, "").is_err());
    /// assert!(ReservedWord::new(0, "While").is_err());
    /// ```
    pub fn new(index: u32, text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { index, text })
    }

    /// Index assigned by the word-list reader
    #[inline]
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the word in characters (one byte per character)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the character code at a column
    ///
    /// # Panics
    /// Panics if `column >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, column: usize) -> u8 {
        self.text.as_bytes()[column]
    }
}

impl fmt::Display for ReservedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
