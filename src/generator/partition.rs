//! Corpus partitioning by length and by column
//!
//! Grouping goes through a hash map and is then sorted by an explicit key, so
//! the resulting order never depends on hash iteration order.

use super::config::GeneratorConfig;
use super::tree::DispatchMode;
use crate::core::ReservedWord;
use rustc_hash::FxHashMap;

/// Group words by length, ordered by ascending length
///
/// Words keep their relative order inside each group.
#[must_use]
pub fn split_by_length<'w>(words: &[&'w ReservedWord]) -> Vec<(usize, Vec<&'w ReservedWord>)> {
    let mut groups: FxHashMap<usize, Vec<&ReservedWord>> = FxHashMap::default();

    for &word in words {
        groups.entry(word.len()).or_default().push(word);
    }

    let mut groups: Vec<_> = groups.into_iter().collect();
    groups.sort_unstable_by_key(|&(length, _)| length);
    groups
}

/// Group words by their character at `column`, ordered by ascending code
#[must_use]
pub fn split_by_column<'w>(
    words: &[&'w ReservedWord],
    column: usize,
) -> Vec<(u8, Vec<&'w ReservedWord>)> {
    let mut groups: FxHashMap<u8, Vec<&ReservedWord>> = FxHashMap::default();

    for &word in words {
        groups.entry(word.char_at(column)).or_default().push(word);
    }

    let mut groups: Vec<_> = groups.into_iter().collect();
    groups.sort_unstable_by_key(|&(ch, _)| ch);
    groups
}

/// Dispatch style for the top-level branch on length
///
/// A handful of distinct lengths is cheaper as sequential comparisons.
#[must_use]
pub const fn length_dispatch_mode(distinct_lengths: usize, config: &GeneratorConfig) -> DispatchMode {
    if distinct_lengths < config.use_if_threshold {
        DispatchMode::IfChain
    } else {
        DispatchMode::Switch
    }
}
