//! Reserved-word switch generation
//!
//! Builds the decision tree for a corpus and renders it through the code
//! emitter. Generation is whole-or-nothing: the rendered code only reaches the
//! sink after the tree has been built and rendered in full.

mod builder;
mod config;
mod partition;
mod selector;
mod tree;


pub use builder::build_tree;
pub use config::GeneratorConfig;
pub use partition::{length_dispatch_mode, split_by_column, split_by_length};
pub use selector::{ColumnChoice, ColumnStats, column_stats, select_column};
pub use tree::{Arm, ColumnCheck, DecisionNode, DecisionTree, DispatchMode, Outcome, TreeStats};

use crate::core::{GenerateError, ReservedWord};
use crate::emit::{Primitives, render};
use std::io::Write;
use tracing::info;

/// Reserved-word switch generator
///
/// Pairs the tuning thresholds with the names of the primitives the emitted
/// code calls.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
    primitives: Primitives,
}

impl Generator {
    #[must_use]
    pub const fn new(config: GeneratorConfig, primitives: Primitives) -> Self {
        Self { config, primitives }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[must_use]
    pub const fn primitives(&self) -> &Primitives {
        &self.primitives
    }

    /// Build the decision tree for `words`
    ///
    /// # Errors
    /// Returns `GenerateError` if the corpus is empty or contains duplicates.
    pub fn build(&self, words: &[ReservedWord]) -> Result<DecisionTree, GenerateError> {
        build_tree(words, &self.config)
    }

    /// Render a finished tree as code text
    #[must_use]
    pub fn render(&self, tree: &DecisionTree) -> String {
        render(tree, &self.primitives, self.config.base_indent)
    }

    /// Build, render and write the code for `words` to `sink`
    ///
    /// Nothing is written unless building and rendering both succeed. The sink
    /// is not flushed or closed.
    ///
    /// # Errors
    /// Returns `GenerateError` if the corpus violates its contract or writing
    /// to the sink fails.
    ///
    /// # Examples
    /// ```
    /// use reserved_switch::core::ReservedWord;
    /// use reserved_switch::generator::Generator;
    ///
    /// let words = vec![ReservedWord::new(0, "do").unwrap()];
    /// let mut out = Vec::new();
    /// Generator::default().generate(&words, &mut out).unwrap();
    ///
    /// let code = String::from_utf8(out).unwrap();
    /// assert!(code.contains("if (CHAR_AT(0) == 'd' && CHAR_AT(1) == 'o') {"));
    /// ```
    pub fn generate<W: Write + ?Sized>(
        &self,
        words: &[ReservedWord],
        sink: &mut W,
    ) -> Result<DecisionTree, GenerateError> {
        let tree = self.build(words)?;
        let code = self.render(&tree);

        sink.write_all(code.as_bytes())?;

        let stats = tree.stats();
        info!(
            words = tree.words().len(),
            bytes = code.len(),
            guesses = stats.guess_matches,
            depth = stats.max_depth,
            "generated reserved word switch"
        );

        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn words(entries: &[(u32, &str)]) -> Vec<ReservedWord> {
        entries
            .iter()
            .map(|&(i, t)| ReservedWord::new(i, t).unwrap())
            .collect()
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_build_writes_nothing() {
        let corpus = words(&[(0, "do"), (1, "do")]);
        let mut out = Vec::new();

        let result = Generator::default().generate(&corpus, &mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn empty_corpus_writes_nothing() {
        let mut out = Vec::new();
        let result = Generator::default().generate(&[], &mut out);

        assert!(matches!(result, Err(GenerateError::EmptyCorpus)));
        assert!(out.is_empty());
    }

    #[test]
    fn sink_errors_are_reported() {
        let corpus = words(&[(0, "do")]);
        let result = Generator::default().generate(&corpus, &mut FailingSink);
        assert!(matches!(result, Err(GenerateError::Io(_))));
    }

    #[test]
    fn generate_returns_the_rendered_tree() {
        let corpus = words(&[(0, "if"), (1, "in"), (2, "int")]);
        let generator = Generator::default();
        let mut out = Vec::new();

        let tree = generator.generate(&corpus, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), generator.render(&tree));
    }

    #[test]
    fn prefixed_primitives_are_used() {
        let corpus = words(&[(0, "do")]);
        let generator = Generator::new(GeneratorConfig::default(), Primitives::with_prefix("JSRW_"));
        let mut out = Vec::new();

        generator.generate(&corpus, &mut out).unwrap();
        let code = String::from_utf8(out).unwrap();

        assert!(code.contains("JSRW_LENGTH() == 2"));
        assert!(code.contains("JSRW_MATCH(0) /* do */"));
        assert!(code.contains("JSRW_NO_MATCH()"));
    }
}
