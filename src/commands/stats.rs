//! Tree statistics command
//!
//! Summarizes the shape of the generated decision tree: dispatch styles,
//! leaf kinds, depth, and which words are only guessed.

use crate::core::ReservedWord;
use crate::generator::{DecisionNode, DecisionTree, TreeStats, split_by_length};

/// Result of analyzing a decision tree
pub struct StatsResult {
    pub total_words: usize,
    /// `(length, word count)` in ascending length order
    pub length_histogram: Vec<(usize, usize)>,
    pub tree: TreeStats,
    /// Words reached through a guess leaf, with their unverified tail length
    pub guessed: Vec<(String, usize)>,
}

/// Analyze the shape of `tree`
#[must_use]
pub fn analyze_tree(tree: &DecisionTree) -> StatsResult {
    let refs: Vec<&ReservedWord> = tree.words().iter().collect();
    let length_histogram = split_by_length(&refs)
        .into_iter()
        .map(|(length, group)| (length, group.len()))
        .collect();

    let mut guessed = Vec::new();
    collect_guesses(tree.root(), &mut guessed);

    StatsResult {
        total_words: tree.words().len(),
        length_histogram,
        tree: tree.stats(),
        guessed,
    }
}

fn collect_guesses(node: &DecisionNode, out: &mut Vec<(String, usize)>) {
    match node {
        DecisionNode::LengthDispatch {
            arms, otherwise, ..
        } => {
            for arm in arms {
                collect_guesses(&arm.node, out);
            }
            collect_guesses(otherwise, out);
        }
        DecisionNode::ColumnDispatch {
            arms, otherwise, ..
        } => {
            for arm in arms {
                collect_guesses(&arm.node, out);
            }
            collect_guesses(otherwise, out);
        }
        DecisionNode::Verify { otherwise, .. } => collect_guesses(otherwise, out),
        DecisionNode::GuessMatch { word, unverified } => {
            out.push((word.text().to_string(), *unverified));
        }
        DecisionNode::Match { .. } | DecisionNode::NoMatch => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;

    fn tree_for(texts: &[&str]) -> DecisionTree {
        let words: Vec<ReservedWord> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| ReservedWord::new(i as u32, *t).unwrap())
            .collect();
        Generator::default().build(&words).unwrap()
    }

    #[test]
    fn histogram_by_length() {
        let result = analyze_tree(&tree_for(&["do", "if", "for", "while"]));

        assert_eq!(result.total_words, 4);
        assert_eq!(result.length_histogram, vec![(2, 2), (3, 1), (5, 1)]);
    }

    #[test]
    fn guessed_words_listed_in_order() {
        let result = analyze_tree(&tree_for(&["continue", "debugger", "do"]));

        assert_eq!(
            result.guessed,
            vec![("continue".to_string(), 7), ("debugger".to_string(), 7)]
        );
        assert_eq!(result.tree.guess_matches, 2);
    }

    #[test]
    fn no_guesses_for_short_words() {
        let result = analyze_tree(&tree_for(&["if", "in", "int"]));
        assert!(result.guessed.is_empty());
        assert_eq!(result.tree.matches, 3);
    }
}
