//! Decision tree construction
//!
//! The corpus is split by length first; every length group is then split
//! recursively on the column chosen by the selector until a single candidate
//! remains.

use super::config::GeneratorConfig;
use super::partition::{length_dispatch_mode, split_by_column, split_by_length};
use super::selector::select_column;
use super::tree::{Arm, ColumnCheck, DecisionNode, DecisionTree};
use crate::core::{ColumnSet, GenerateError, ReservedWord};
use tracing::debug;

/// Build the decision tree for a corpus
///
/// The corpus is canonicalized by `(index, text)` first, so the tree does not
/// depend on the order the reader produced the words in.
///
/// # Errors
/// Returns `GenerateError::EmptyCorpus` for an empty corpus and
/// `GenerateError::ColumnsExhausted` if a word appears twice.
pub fn build_tree(
    words: &[ReservedWord],
    config: &GeneratorConfig,
) -> Result<DecisionTree, GenerateError> {
    if words.is_empty() {
        return Err(GenerateError::EmptyCorpus);
    }

    let mut canonical = words.to_vec();
    canonical.sort_unstable_by(|a, b| (a.index(), a.text()).cmp(&(b.index(), b.text())));

    let refs: Vec<&ReservedWord> = canonical.iter().collect();
    let root = build_length_dispatch(&refs, config)?;

    Ok(DecisionTree {
        words: canonical,
        root,
    })
}

fn build_length_dispatch(
    words: &[&ReservedWord],
    config: &GeneratorConfig,
) -> Result<DecisionNode, GenerateError> {
    let groups = split_by_length(words);
    let mode = length_dispatch_mode(groups.len(), config);
    debug!(lengths = groups.len(), %mode, "length dispatch");

    let arms = groups
        .into_iter()
        .map(|(length, group)| {
            let node = build_column_dispatch(&group, &ColumnSet::identity(length), config)?;
            Ok(Arm { key: length, node })
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    Ok(DecisionNode::LengthDispatch {
        mode,
        arms,
        otherwise: Box::new(DecisionNode::NoMatch),
    })
}

fn build_column_dispatch(
    words: &[&ReservedWord],
    columns: &ColumnSet,
    config: &GeneratorConfig,
) -> Result<DecisionNode, GenerateError> {
    let (first, rest) = words.split_first().ok_or(GenerateError::NoCandidates)?;
    if rest.is_empty() {
        return Ok(build_leaf(first, columns, config));
    }

    if columns.is_exhausted() {
        return Err(GenerateError::ColumnsExhausted {
            length: first.len(),
            words: words.iter().map(|w| w.text().to_string()).collect(),
        });
    }

    let choice = select_column(words, columns.pending(), config)?;
    debug!(
        column = choice.column,
        mode = %choice.mode,
        candidates = words.len(),
        unprocessed = columns.unprocessed(),
        "column dispatch"
    );

    let remaining = columns.consume(choice.slot);
    let arms = split_by_column(words, choice.column)
        .into_iter()
        .map(|(key, group)| {
            let node = build_column_dispatch(&group, &remaining, config)?;
            Ok(Arm { key, node })
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    Ok(DecisionNode::ColumnDispatch {
        column: choice.column,
        mode: choice.mode,
        arms,
        otherwise: Box::new(DecisionNode::NoMatch),
    })
}

/// Leaf for a lone candidate
///
/// Tails longer than `tail_test_threshold` are not compared: the leaf becomes a
/// guess that callers must confirm if they need strict recognition.
fn build_leaf(word: &ReservedWord, columns: &ColumnSet, config: &GeneratorConfig) -> DecisionNode {
    let unprocessed = columns.unprocessed();

    if unprocessed == 0 {
        return DecisionNode::Match { word: word.clone() };
    }

    if unprocessed > config.tail_test_threshold {
        debug!(word = word.text(), unverified = unprocessed, "tail comparison elided");
        return DecisionNode::GuessMatch {
            word: word.clone(),
            unverified: unprocessed,
        };
    }

    let checks = columns
        .pending()
        .iter()
        .map(|&column| ColumnCheck {
            column,
            expected: word.char_at(column),
        })
        .collect();

    DecisionNode::Verify {
        checks,
        word: word.clone(),
        otherwise: Box::new(DecisionNode::NoMatch),
    }
}
