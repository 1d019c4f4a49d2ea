//! Names of the primitives the generated code calls
//!
//! The surrounding hand-written recognizer defines these, usually as macros.

/// Primitive names used in emitted code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primitives {
    /// `LENGTH()`: length of the candidate
    pub length: String,
    /// `CHAR_AT(i)`: character `i` of the candidate, 0-based
    pub char_at: String,
    /// `MATCH(index)`: accept the candidate as word `index`
    pub matched: String,
    /// `NO_MATCH()`: reject the candidate
    pub no_match: String,
    /// `GUESS_MATCH(index)`: accept without comparing the tail
    pub guess_match: String,
}

impl Primitives {
    /// Default primitive names with `prefix` prepended to each
    ///
    /// # Examples
    /// ```
    /// use reserved_switch::emit::Primitives;
    ///
    /// let primitives = Primitives::with_prefix("JSRW_");
    /// assert_eq!(primitives.char_at, "JSRW_CHAR_AT");
    /// ```
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            length: format!("{prefix}LENGTH"),
            char_at: format!("{prefix}CHAR_AT"),
            matched: format!("{prefix}MATCH"),
            no_match: format!("{prefix}NO_MATCH"),
            guess_match: format!("{prefix}GUESS_MATCH"),
        }
    }

    pub(crate) fn length_call(&self) -> String {
        format!("{}()", self.length)
    }

    pub(crate) fn char_at_call(&self, column: usize) -> String {
        format!("{}({column})", self.char_at)
    }

    pub(crate) fn match_call(&self, index: u32) -> String {
        format!("{}({index})", self.matched)
    }

    pub(crate) fn no_match_call(&self) -> String {
        format!("{}()", self.no_match)
    }

    pub(crate) fn guess_match_call(&self, index: u32) -> String {
        format!("{}({index})", self.guess_match)
    }
}

impl Default for Primitives {
    fn default() -> Self {
        Self::with_prefix("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names() {
        let p = Primitives::default();
        assert_eq!(p.length_call(), "LENGTH()");
        assert_eq!(p.char_at_call(3), "CHAR_AT(3)");
        assert_eq!(p.match_call(12), "MATCH(12)");
        assert_eq!(p.no_match_call(), "NO_MATCH()");
        assert_eq!(p.guess_match_call(7), "GUESS_MATCH(7)");
    }

    #[test]
    fn custom_names_are_used_verbatim() {
        let p = Primitives {
            length: "len".to_string(),
            char_at: "at".to_string(),
            matched: "hit".to_string(),
            no_match: "miss".to_string(),
            guess_match: "maybe".to_string(),
        };
        assert_eq!(p.char_at_call(0), "at(0)");
        assert_eq!(p.guess_match_call(1), "maybe(1)");
    }
}
