//! Decision tree representation
//!
//! The tree is built once from the corpus and never mutated afterwards. Besides
//! feeding the code emitter, it can be interpreted directly, which is how the
//! crate checks that emitted code recognizes what it should.

use crate::core::ReservedWord;
use std::fmt;

/// How a dispatch node tests its branches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchMode {
    /// A `switch` statement with one `case` per branch
    Switch,
    /// Sequential `if` equality tests
    IfChain,
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switch => write!(f, "switch"),
            Self::IfChain => write!(f, "if-chain"),
        }
    }
}

/// One branch of a dispatch node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arm<K> {
    pub key: K,
    pub node: DecisionNode,
}

/// A single equality test of a column against an expected character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCheck {
    pub column: usize,
    pub expected: u8,
}

/// A node of the decision tree
///
/// Dispatch nodes carry an explicit `otherwise` child, taken when no arm
/// applies. The builder always makes it `NoMatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionNode {
    /// Branch on the candidate's length
    LengthDispatch {
        mode: DispatchMode,
        arms: Vec<Arm<usize>>,
        otherwise: Box<DecisionNode>,
    },
    /// Branch on the candidate's character at `column`
    ColumnDispatch {
        column: usize,
        mode: DispatchMode,
        arms: Vec<Arm<u8>>,
        otherwise: Box<DecisionNode>,
    },
    /// Conjunction of tests over the remaining columns of a lone candidate
    Verify {
        checks: Vec<ColumnCheck>,
        word: ReservedWord,
        otherwise: Box<DecisionNode>,
    },
    /// Every column has been verified on the path here
    Match { word: ReservedWord },
    /// Accepted without testing the last `unverified` columns
    GuessMatch { word: ReservedWord, unverified: usize },
    NoMatch,
}

/// Result of running the decision procedure on a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'t> {
    Match(&'t ReservedWord),
    /// Provisional acceptance; the tail of the candidate was not compared
    GuessMatch(&'t ReservedWord),
    NoMatch,
}

impl Outcome<'_> {
    /// Index reported by the procedure, guesses included
    #[must_use]
    pub const fn index(&self) -> Option<u32> {
        match self {
            Self::Match(word) | Self::GuessMatch(word) => Some(word.index()),
            Self::NoMatch => None,
        }
    }

    /// Index of the recognized word, re-verifying guesses against `candidate`
    #[must_use]
    pub fn confirm(&self, candidate: &str) -> Option<u32> {
        match self {
            Self::Match(word) => Some(word.index()),
            Self::GuessMatch(word) => (word.text() == candidate).then_some(word.index()),
            Self::NoMatch => None,
        }
    }
}

impl DecisionNode {
    /// Interpret this node on a candidate's bytes
    #[must_use]
    pub fn evaluate(&self, candidate: &[u8]) -> Outcome<'_> {
        match self {
            Self::LengthDispatch {
                arms, otherwise, ..
            } => arms
                .iter()
                .find(|arm| arm.key == candidate.len())
                .map_or_else(|| otherwise.evaluate(candidate), |arm| arm.node.evaluate(candidate)),
            Self::ColumnDispatch {
                column,
                arms,
                otherwise,
                ..
            } => {
                let ch = candidate.get(*column).copied();
                arms.iter()
                    .find(|arm| Some(arm.key) == ch)
                    .map_or_else(|| otherwise.evaluate(candidate), |arm| arm.node.evaluate(candidate))
            }
            Self::Verify {
                checks,
                word,
                otherwise,
            } => {
                let passes = checks
                    .iter()
                    .all(|check| candidate.get(check.column) == Some(&check.expected));
                if passes {
                    Outcome::Match(word)
                } else {
                    otherwise.evaluate(candidate)
                }
            }
            Self::Match { word } => Outcome::Match(word),
            Self::GuessMatch { word, .. } => Outcome::GuessMatch(word),
            Self::NoMatch => Outcome::NoMatch,
        }
    }

    fn collect_stats(&self, depth: usize, stats: &mut TreeStats) {
        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);

        match self {
            Self::LengthDispatch {
                mode,
                arms,
                otherwise,
            } => {
                stats.count_dispatch(*mode);
                for arm in arms {
                    arm.node.collect_stats(depth + 1, stats);
                }
                otherwise.collect_stats(depth + 1, stats);
            }
            Self::ColumnDispatch {
                mode,
                arms,
                otherwise,
                ..
            } => {
                stats.count_dispatch(*mode);
                for arm in arms {
                    arm.node.collect_stats(depth + 1, stats);
                }
                otherwise.collect_stats(depth + 1, stats);
            }
            Self::Verify { otherwise, .. } => {
                stats.verifies += 1;
                stats.matches += 1;
                otherwise.collect_stats(depth + 1, stats);
            }
            Self::Match { .. } => stats.matches += 1,
            Self::GuessMatch { .. } => stats.guess_matches += 1,
            Self::NoMatch => stats.no_matches += 1,
        }
    }
}

/// Shape summary of a decision tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub switches: usize,
    pub if_chains: usize,
    /// Tail conjunctions (each also counted as a match)
    pub verifies: usize,
    pub matches: usize,
    pub guess_matches: usize,
    pub no_matches: usize,
    pub max_depth: usize,
}

impl TreeStats {
    fn count_dispatch(&mut self, mode: DispatchMode) {
        match mode {
            DispatchMode::Switch => self.switches += 1,
            DispatchMode::IfChain => self.if_chains += 1,
        }
    }
}

/// A finished decision tree together with the corpus it was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    pub(crate) words: Vec<ReservedWord>,
    pub(crate) root: DecisionNode,
}

impl DecisionTree {
    /// Corpus in canonical `(index, text)` order
    #[must_use]
    pub fn words(&self) -> &[ReservedWord] {
        &self.words
    }

    #[must_use]
    pub const fn root(&self) -> &DecisionNode {
        &self.root
    }

    /// Run the decision procedure exactly as the emitted code would
    #[must_use]
    pub fn evaluate(&self, candidate: &str) -> Outcome<'_> {
        self.root.evaluate(candidate.as_bytes())
    }

    /// Recognize `candidate`, confirming guessed matches with a full comparison
    ///
    /// # Examples
    /// ```
    /// use reserved_switch::core::ReservedWord;
    /// use reserved_switch::generator::Generator;
    ///
    /// let words = vec![
    ///     ReservedWord::new(0, "function").unwrap(),
    ///     ReservedWord::new(1, "for").unwrap(),
    /// ];
    /// let tree = Generator::default().build(&words).unwrap();
    ///
    /// assert_eq!(tree.recognize("function"), Some(0));
    /// assert_eq!(tree.recognize("for"), Some(1));
    /// // Guessed by the tree but rejected on confirmation
    /// assert_eq!(tree.recognize("fxxxxxxx"), None);
    /// ```
    #[must_use]
    pub fn recognize(&self, candidate: &str) -> Option<u32> {
        self.evaluate(candidate).confirm(candidate)
    }

    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.root.collect_stats(0, &mut stats);
        stats
    }
}
