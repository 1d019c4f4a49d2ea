//! Code emission
//!
//! Serializes a finished decision tree into indented C-like text. The text is
//! meant to be pasted (or `#include`d) into a hand-written recognizer function
//! that defines the primitives named in `Primitives`.

mod emitter;
mod primitives;

pub use emitter::CodeEmitter;
pub use primitives::Primitives;

use crate::generator::DecisionTree;

/// Render `tree` starting at indentation level `base_indent`
#[must_use]
pub fn render(tree: &DecisionTree, primitives: &Primitives, base_indent: usize) -> String {
    CodeEmitter::new(primitives, base_indent).emit_tree(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReservedWord;
    use crate::generator::{GeneratorConfig, build_tree};

    fn render_words(entries: &[(u32, &str)]) -> String {
        let words: Vec<ReservedWord> = entries
            .iter()
            .map(|&(i, t)| ReservedWord::new(i, t).unwrap())
            .collect();
        let tree = build_tree(&words, &GeneratorConfig::default()).unwrap();
        render(&tree, &Primitives::default(), 1)
    }

    #[test]
    fn single_short_word() {
        let expected = "
    /*
     * Generating switch for the list of 1 entries:
     * 0: do
     */
    if (LENGTH() == 2) {
        if (CHAR_AT(0) == 'd' && CHAR_AT(1) == 'o') {
            MATCH(0) /* do */
        }
        NO_MATCH()
    }
    NO_MATCH()
";
        assert_eq!(render_words(&[(0, "do")]), &expected[1..]);
    }

    #[test]
    fn if_in_int() {
        let expected = "
    /*
     * Generating switch for the list of 3 entries:
     * 0: if
     * 1: in
     * 2: int
     */
    if (LENGTH() == 2) {
        if (CHAR_AT(0) == 'i') {
            if (CHAR_AT(1) == 'f') {
                MATCH(0) /* if */
            }
            if (CHAR_AT(1) == 'n') {
                MATCH(1) /* in */
            }
            NO_MATCH()
        }
        NO_MATCH()
    }
    if (LENGTH() == 3) {
        if (CHAR_AT(0) == 'i' && CHAR_AT(1) == 'n' && CHAR_AT(2) == 't') {
            MATCH(2) /* int */
        }
        NO_MATCH()
    }
    NO_MATCH()
";
        assert_eq!(
            render_words(&[(0, "if"), (1, "in"), (2, "int")]),
            &expected[1..]
        );
    }

    #[test]
    fn shared_column_precedes_switch() {
        // Every length-4 word starts with 'c'. The remaining columns all have
        // four distinct characters, so the narrowest one becomes a switch.
        let code = render_words(&[(0, "case"), (1, "catch"), (2, "chin"), (3, "colt"), (4, "curb")]);

        let shared = code.find("if (CHAR_AT(0) == 'c') {").unwrap();
        let switch = code.find("switch (CHAR_AT(2)) {").unwrap();
        assert!(shared < switch);
        for letter in ['i', 'l', 'r', 's'] {
            assert!(code.contains(&format!("  case '{letter}':")));
        }
    }

    #[test]
    fn length_switch_and_guess() {
        let code = render_words(&[(0, "do"), (1, "for"), (2, "with"), (3, "continue")]);

        assert!(code.contains("    switch (LENGTH()) {\n"));
        assert!(code.contains("      case 8:\n        GUESS_MATCH(3) /* continue */\n"));
        assert!(code.ends_with("    }\n    NO_MATCH()\n"));
    }

    #[test]
    fn base_indent_zero() {
        let words = vec![ReservedWord::new(0, "do").unwrap()];
        let tree = build_tree(&words, &GeneratorConfig::default()).unwrap();
        let code = render(&tree, &Primitives::default(), 0);

        assert!(code.starts_with("/*\n"));
        assert!(code.ends_with("}\nNO_MATCH()\n"));
    }
}
