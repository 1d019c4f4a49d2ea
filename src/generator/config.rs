//! Generator tuning knobs

/// Thresholds steering dispatch style and tail elision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Fewer outcomes than this (lengths) or at most this many (characters)
    /// are dispatched with chained `if` tests instead of a `switch`
    pub use_if_threshold: usize,
    /// A lone candidate with more untested columns than this becomes a
    /// `GUESS_MATCH` leaf instead of an explicit tail comparison
    pub tail_test_threshold: usize,
    /// Indentation level of the outermost emitted line
    pub base_indent: usize,
}

impl GeneratorConfig {
    /// Create a new generator configuration
    ///
    /// # Parameters
    /// - `use_if_threshold`: if-chain vs switch cutoff (default: 3)
    /// - `tail_test_threshold`: longest tail compared explicitly (default: 4)
    /// - `base_indent`: indentation level of emitted code (default: 1)
    #[must_use]
    pub const fn new(use_if_threshold: usize, tail_test_threshold: usize, base_indent: usize) -> Self {
        Self {
            use_if_threshold,
            tail_test_threshold,
            base_indent,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(3, 4, 1)
    }
}
