//! Reserved word list reading
//!
//! The list format is line-based:
//!
//! ```text
//! # comment
//! while
//! using [explicit-resource-management]
//! ```
//!
//! Each entry's index is its ordinal position among all entries of the list,
//! so entries whose feature is not enabled leave gaps in the index sequence.
//! Auxiliary reader arguments name the enabled features.

use super::embedded::DEFAULT_ENTRIES;
use crate::core::{ReservedWord, WordError};
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Source name selecting the embedded list
pub const DEFAULT_SOURCE: &str = "default";

/// Error type for word list reading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    InvalidWord {
        line: usize,
        text: String,
        reason: WordError,
    },
    MalformedEntry {
        line: usize,
        text: String,
    },
    DuplicateWord {
        line: usize,
        first_line: usize,
        text: String,
    },
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::InvalidWord { line, text, reason } => {
                write!(f, "Line {line}: invalid reserved word '{text}': {reason}")
            }
            Self::MalformedEntry { line, text } => {
                write!(f, "Line {line}: expected `word` or `word [feature]`, got '{text}'")
            }
            Self::DuplicateWord {
                line,
                first_line,
                text,
            } => write!(
                f,
                "Line {line}: '{text}' already listed on line {first_line}"
            ),
            Self::Empty => write!(f, "Word list has no enabled entries"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidWord { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parse word list lines, keeping entries whose feature is enabled
///
/// # Errors
///
/// Returns `LoadError` if an entry is malformed, is not a valid reserved word,
/// repeats an earlier entry, or if no entry is enabled.
///
/// # Examples
/// ```
/// use reserved_switch::wordlists::loader::parse_entries;
///
/// let lines = ["# keywords", "if", "using [resources]", "else"];
///
/// let words = parse_entries(lines, &[]).unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].index(), 2); // "using" keeps its slot
///
/// let words = parse_entries(lines, &["resources".to_string()]).unwrap();
/// assert_eq!(words.len(), 3);
/// ```
pub fn parse_entries<'a, I>(lines: I, features: &[String]) -> Result<Vec<ReservedWord>, LoadError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut words = Vec::new();
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();
    let mut ordinal: u32 = 0;

    for (line_index, raw) in lines.into_iter().enumerate() {
        let line = line_index + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (text, feature) = split_entry(trimmed).ok_or_else(|| LoadError::MalformedEntry {
            line,
            text: trimmed.to_string(),
        })?;

        if let Some(&first_line) = seen.get(text) {
            return Err(LoadError::DuplicateWord {
                line,
                first_line,
                text: text.to_string(),
            });
        }
        seen.insert(text.to_string(), line);

        let index = ordinal;
        ordinal += 1;

        if feature.is_some_and(|f| !features.iter().any(|enabled| enabled == f)) {
            continue;
        }

        let word = ReservedWord::new(index, text).map_err(|reason| LoadError::InvalidWord {
            line,
            text: text.to_string(),
            reason,
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(words)
}

/// Split `word` or `word [feature]`
fn split_entry(entry: &str) -> Option<(&str, Option<&str>)> {
    let mut parts = entry.split_whitespace();
    let word = parts.next()?;

    let feature = match parts.next() {
        None => None,
        Some(tag) => Some(tag.strip_prefix('[')?.strip_suffix(']')?),
    };

    if parts.next().is_some() || feature.is_some_and(str::is_empty) {
        return None;
    }

    Some((word, feature))
}

/// Load reserved words from a file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or its contents are invalid.
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    features: &[String],
) -> Result<Vec<ReservedWord>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_entries(content.lines(), features)
}

/// Reserved words from the list embedded at build time
///
/// # Errors
///
/// Returns `LoadError` only if the embedded list itself is invalid.
pub fn default_words(features: &[String]) -> Result<Vec<ReservedWord>, LoadError> {
    parse_entries(DEFAULT_ENTRIES.iter().copied(), features)
}

/// Load from `source`: `"default"` for the embedded list, otherwise a path
///
/// `reader_args` are passed through unchanged as enabled features.
///
/// # Errors
///
/// Returns `LoadError` if the source cannot be read or is invalid.
pub fn load_source(source: &str, reader_args: &[String]) -> Result<Vec<ReservedWord>, LoadError> {
    if source == DEFAULT_SOURCE {
        default_words(reader_args)
    } else {
        load_from_file(source, reader_args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_skipped() {
        let words = parse_entries(["# header", "", "   ", "do", "  # indented", "if"], &[]).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "do");
        assert_eq!(words[0].index(), 0);
        assert_eq!(words[1].text(), "if");
        assert_eq!(words[1].index(), 1);
    }

    #[test]
    fn disabled_entries_leave_index_gaps() {
        let lines = ["await", "using [resources]", "accessor [decorators]", "yield"];

        let words = parse_entries(lines, &["decorators".to_string()]).unwrap();
        let pairs: Vec<(u32, &str)> = words.iter().map(|w| (w.index(), w.text())).collect();

        assert_eq!(pairs, vec![(0, "await"), (2, "accessor"), (3, "yield")]);
    }

    #[test]
    fn invalid_word_reports_line() {
        let result = parse_entries(["do", "Else"], &[]);
        assert!(matches!(
            result,
            Err(LoadError::InvalidWord {
                line: 2,
                reason: WordError::InvalidCharacters,
                ..
            })
        ));
    }

    #[test]
    fn malformed_entries_rejected() {
        for entry in ["do while", "do [x", "do []", "do [a] [b]"] {
            let result = parse_entries([entry], &[]);
            assert!(
                matches!(result, Err(LoadError::MalformedEntry { line: 1, .. })),
                "'{entry}' should be malformed"
            );
        }
    }

    #[test]
    fn duplicate_words_rejected() {
        let result = parse_entries(["let", "var", "let [other]"], &[]);
        assert!(matches!(
            result,
            Err(LoadError::DuplicateWord {
                line: 3,
                first_line: 1,
                ..
            })
        ));
    }

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(parse_entries(["# nothing"], &[]), Err(LoadError::Empty)));
        assert!(matches!(
            parse_entries(["using [resources]"], &[]),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("/nonexistent/reserved_words.txt", &[]);
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn default_source_uses_embedded_list() {
        let words = load_source(DEFAULT_SOURCE, &[]).unwrap();
        assert!(words.iter().any(|w| w.text() == "function"));
        assert!(!words.iter().any(|w| w.text() == "using"));
    }
}
