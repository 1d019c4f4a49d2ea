//! Tree-to-text serialization
//!
//! The emitter walks the tree once, depth-first, appending lines to an
//! in-memory buffer. Nested blocks are emitted through an `IndentGuard`, which
//! restores the indentation level when dropped.

use super::primitives::Primitives;
use crate::generator::{Arm, DecisionNode, DecisionTree, DispatchMode};
use std::ops::{Deref, DerefMut};

const INDENT: &str = "    ";

/// Line-oriented writer for generated code
pub struct CodeEmitter<'p> {
    primitives: &'p Primitives,
    out: String,
    level: usize,
}

/// Indentation scope; the level drops back when the guard goes away
struct IndentGuard<'e, 'p> {
    emitter: &'e mut CodeEmitter<'p>,
}

impl<'p> Deref for IndentGuard<'_, 'p> {
    type Target = CodeEmitter<'p>;

    fn deref(&self) -> &Self::Target {
        &*self.emitter
    }
}

impl DerefMut for IndentGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.emitter
    }
}

impl Drop for IndentGuard<'_, '_> {
    fn drop(&mut self) {
        self.emitter.level -= 1;
    }
}

impl<'p> CodeEmitter<'p> {
    #[must_use]
    pub const fn new(primitives: &'p Primitives, base_indent: usize) -> Self {
        Self {
            primitives,
            out: String::new(),
            level: base_indent,
        }
    }

    /// Emit the header comment and the whole tree, returning the text
    #[must_use]
    pub fn emit_tree(mut self, tree: &DecisionTree) -> String {
        self.emit_header(tree);
        self.emit_node(tree.root());
        self.out
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn indented(&mut self) -> IndentGuard<'_, 'p> {
        self.level += 1;
        IndentGuard { emitter: self }
    }

    fn emit_header(&mut self, tree: &DecisionTree) {
        let words = tree.words();

        self.line("/*");
        self.line(&format!(
            " * Generating switch for the list of {} entries:",
            words.len()
        ));
        for word in words {
            self.line(&format!(" * {}: {}", word.index(), word.text()));
        }
        self.line(" */");
    }

    fn emit_node(&mut self, node: &DecisionNode) {
        match node {
            DecisionNode::LengthDispatch {
                mode,
                arms,
                otherwise,
            } => {
                let subject = self.primitives.length_call();
                self.emit_dispatch(&subject, *mode, arms, |length| length.to_string());
                self.emit_node(otherwise);
            }
            DecisionNode::ColumnDispatch {
                column,
                mode,
                arms,
                otherwise,
            } => {
                let subject = self.primitives.char_at_call(*column);
                self.emit_dispatch(&subject, *mode, arms, quote);
                self.emit_node(otherwise);
            }
            DecisionNode::Verify {
                checks,
                word,
                otherwise,
            } => {
                let condition = checks
                    .iter()
                    .map(|check| {
                        format!(
                            "{} == {}",
                            self.primitives.char_at_call(check.column),
                            quote(check.expected)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(" && ");

                self.line(&format!("if ({condition}) {{"));
                {
                    let mut block = self.indented();
                    let call = block.primitives.match_call(word.index());
                    block.line(&format!("{call} /* {} */", word.text()));
                }
                self.line("}");
                self.emit_node(otherwise);
            }
            DecisionNode::Match { word } => {
                let call = self.primitives.match_call(word.index());
                self.line(&format!("{call} /* {} */", word.text()));
            }
            DecisionNode::GuessMatch { word, .. } => {
                let call = self.primitives.guess_match_call(word.index());
                self.line(&format!("{call} /* {} */", word.text()));
            }
            DecisionNode::NoMatch => {
                let call = self.primitives.no_match_call();
                self.line(&call);
            }
        }
    }

    fn emit_dispatch<K: Copy>(
        &mut self,
        subject: &str,
        mode: DispatchMode,
        arms: &[Arm<K>],
        label: impl Fn(K) -> String,
    ) {
        match mode {
            DispatchMode::Switch => {
                self.line(&format!("switch ({subject}) {{"));
                for arm in arms {
                    self.line(&format!("  case {}:", label(arm.key)));
                    self.indented().emit_node(&arm.node);
                }
                self.line("}");
            }
            DispatchMode::IfChain => {
                for arm in arms {
                    self.line(&format!("if ({subject} == {}) {{", label(arm.key)));
                    self.indented().emit_node(&arm.node);
                    self.line("}");
                }
            }
        }
    }
}

/// Character literal for a column test
fn quote(ch: u8) -> String {
    format!("'{}'", char::from(ch).escape_default())
}
