//! Column selection
//!
//! Picks the next column to branch on for a set of candidates sharing a tree
//! node, together with the dispatch style for that branch.

use super::config::GeneratorConfig;
use super::tree::DispatchMode;
use crate::core::{GenerateError, ReservedWord};
use rustc_hash::FxHashSet;
use tracing::trace;

/// Character statistics of one column across a candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnStats {
    pub column: usize,
    /// Distinct character codes seen in the column
    pub distinct: usize,
    /// `max code - min code + 1`
    pub span: u32,
}

/// The column a dispatch node branches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnChoice {
    /// Position of the column within the pending slots of the `ColumnSet`
    pub slot: usize,
    pub column: usize,
    pub mode: DispatchMode,
}

/// Compute distinct-character count and span of `column` across `words`
///
/// Returns `None` for an empty word list.
///
/// # Examples
/// ```
/// use reserved_switch::core::ReservedWord;
/// use reserved_switch::generator::column_stats;
///
/// let words = [
///     ReservedWord::new(0, "if").unwrap(),
///     ReservedWord::new(1, "in").unwrap(),
/// ];
/// let refs: Vec<&ReservedWord> = words.iter().collect();
///
/// let stats = column_stats(&refs, 1).unwrap();
/// assert_eq!(stats.distinct, 2);
/// assert_eq!(stats.span, u32::from(b'n' - b'f') + 1);
/// ```
#[must_use]
pub fn column_stats(words: &[&ReservedWord], column: usize) -> Option<ColumnStats> {
    let mut chars = FxHashSet::default();
    let mut min = u8::MAX;
    let mut max = u8::MIN;

    for word in words {
        let ch = word.char_at(column);
        chars.insert(ch);
        min = min.min(ch);
        max = max.max(ch);
    }

    if chars.is_empty() {
        return None;
    }

    Some(ColumnStats {
        column,
        distinct: chars.len(),
        span: u32::from(max - min) + 1,
    })
}

/// Select the column to dispatch on among the pending columns
///
/// A column where every candidate has the same character is taken at once as a
/// single-branch if-chain: it has to be verified anyway and costs one test.
/// Otherwise the column with the fewest distinct characters wins when that
/// count is within `use_if_threshold` (if-chain), else the column with the
/// narrowest span wins (switch). Ties go to the first column in slot order.
///
/// # Errors
/// Returns `GenerateError::NoCandidates` if `words` is empty and
/// `GenerateError::ColumnsExhausted` if `pending` is empty.
pub fn select_column(
    words: &[&ReservedWord],
    pending: &[usize],
    config: &GeneratorConfig,
) -> Result<ColumnChoice, GenerateError> {
    if words.is_empty() {
        return Err(GenerateError::NoCandidates);
    }

    let mut min_count: Option<(usize, ColumnStats)> = None;
    let mut min_span: Option<(usize, ColumnStats)> = None;

    for (slot, &column) in pending.iter().enumerate() {
        let stats = column_stats(words, column).ok_or(GenerateError::NoCandidates)?;
        trace!(column, distinct = stats.distinct, span = stats.span, "column stats");

        if stats.span == 1 {
            return Ok(ColumnChoice {
                slot,
                column,
                mode: DispatchMode::IfChain,
            });
        }

        if min_count.is_none_or(|(_, best)| stats.distinct < best.distinct) {
            min_count = Some((slot, stats));
        }
        if min_span.is_none_or(|(_, best)| stats.span < best.span) {
            min_span = Some((slot, stats));
        }
    }

    let (Some((count_slot, count)), Some((span_slot, span))) = (min_count, min_span) else {
        return Err(GenerateError::ColumnsExhausted {
            length: words[0].len(),
            words: words.iter().map(|w| w.text().to_string()).collect(),
        });
    };

    if count.distinct <= config.use_if_threshold {
        Ok(ColumnChoice {
            slot: count_slot,
            column: count.column,
            mode: DispatchMode::IfChain,
        })
    } else {
        Ok(ColumnChoice {
            slot: span_slot,
            column: span.column,
            mode: DispatchMode::Switch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<ReservedWord> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| ReservedWord::new(i as u32, *t).unwrap())
            .collect()
    }

    #[test]
    fn stats_of_empty_list_is_none() {
        assert_eq!(column_stats(&[], 0), None);
    }

    #[test]
    fn shared_column_selected_first() {
        let list = words(&["case", "cast"]);
        let refs: Vec<&ReservedWord> = list.iter().collect();

        let choice = select_column(&refs, &[0, 1, 2, 3], &GeneratorConfig::default()).unwrap();

        assert_eq!(choice.column, 0);
        assert_eq!(choice.slot, 0);
        assert_eq!(choice.mode, DispatchMode::IfChain);
    }

    #[test]
    fn shared_column_found_later_in_scan() {
        let list = words(&["ab", "cb"]);
        let refs: Vec<&ReservedWord> = list.iter().collect();

        let choice = select_column(&refs, &[0, 1], &GeneratorConfig::default()).unwrap();

        assert_eq!(choice.column, 1);
        assert_eq!(choice.slot, 1);
    }

    #[test]
    fn few_distinct_characters_use_if_chain() {
        let list = words(&["ax", "by", "cx"]);
        let refs: Vec<&ReservedWord> = list.iter().collect();

        let choice = select_column(&refs, &[0, 1], &GeneratorConfig::default()).unwrap();

        // Column 1 has two distinct characters, column 0 has three
        assert_eq!(choice.column, 1);
        assert_eq!(choice.mode, DispatchMode::IfChain);
    }

    #[test]
    fn many_distinct_characters_use_narrowest_span_switch() {
        let list = words(&["az", "bd", "cm", "dq"]);
        let refs: Vec<&ReservedWord> = list.iter().collect();

        let choice = select_column(&refs, &[0, 1], &GeneratorConfig::default()).unwrap();

        // Both columns have four characters; column 0 spans a..d
        assert_eq!(choice.column, 0);
        assert_eq!(choice.mode, DispatchMode::Switch);
    }

    #[test]
    fn ties_go_to_first_slot() {
        let list = words(&["ab", "ba"]);
        let refs: Vec<&ReservedWord> = list.iter().collect();

        let choice = select_column(&refs, &[1, 0], &GeneratorConfig::default()).unwrap();

        assert_eq!(choice.slot, 0);
        assert_eq!(choice.column, 1);
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let result = select_column(&[], &[0], &GeneratorConfig::default());
        assert!(matches!(result, Err(GenerateError::NoCandidates)));
    }

    #[test]
    fn no_pending_columns_is_an_error() {
        let list = words(&["do", "do"]);
        let refs: Vec<&ReservedWord> = list.iter().collect();

        let result = select_column(&refs, &[], &GeneratorConfig::default());
        assert!(matches!(
            result,
            Err(GenerateError::ColumnsExhausted { length: 2, .. })
        ));
    }
}
