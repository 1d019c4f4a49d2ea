//! Decision tree verification
//!
//! Runs the decision procedure on every reserved word, on every single-letter
//! substitution of every word, and on seeded random probes of the corpus
//! lengths. Probes are independent, so they are evaluated in parallel.

use crate::core::ReservedWord;
use crate::generator::{DecisionTree, Outcome};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Parameters for a verification run
#[derive(Debug, Clone, Copy)]
pub struct VerifyConfig {
    /// Number of random probes in addition to the substitutions
    pub random_probes: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            random_probes: 10_000,
            seed: 0,
            show_progress: false,
        }
    }
}

/// Result of a verification run
#[derive(Debug)]
pub struct VerifyReport {
    pub words_checked: usize,
    /// Reserved words only reached through a guess leaf
    pub words_guessed: usize,
    pub probes_checked: usize,
    /// Non-words accepted by a guess leaf and rejected on confirmation
    pub false_guesses: usize,
    pub failures: Vec<String>,
    pub duration: Duration,
}

impl VerifyReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

enum ProbeResult {
    Rejected,
    FalseGuess,
    Failure(String),
}

/// Verify `tree` against its own corpus and against generated non-words
#[must_use]
pub fn run_verify(tree: &DecisionTree, config: &VerifyConfig) -> VerifyReport {
    let start = Instant::now();
    let mut failures = Vec::new();
    let mut words_guessed = 0;

    for word in tree.words() {
        match tree.evaluate(word.text()) {
            Outcome::Match(found) if found.index() == word.index() => {}
            Outcome::GuessMatch(found) if found.index() == word.index() => words_guessed += 1,
            other => failures.push(format!(
                "'{}' ({}) yielded {:?} instead of its own index",
                word.text(),
                word.index(),
                other.index()
            )),
        }
    }

    let probes = build_probes(tree, config);

    let pb = if config.show_progress {
        ProgressBar::new(probes.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let results: Vec<ProbeResult> = probes
        .par_iter()
        .map(|probe| {
            let result = check_probe(tree, probe);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();

    let mut false_guesses = 0;
    for result in results {
        match result {
            ProbeResult::Rejected => {}
            ProbeResult::FalseGuess => false_guesses += 1,
            ProbeResult::Failure(message) => failures.push(message),
        }
    }

    VerifyReport {
        words_checked: tree.words().len(),
        words_guessed,
        probes_checked: probes.len(),
        false_guesses,
        failures,
        duration: start.elapsed(),
    }
}

fn check_probe(tree: &DecisionTree, probe: &str) -> ProbeResult {
    match tree.evaluate(probe) {
        Outcome::NoMatch => ProbeResult::Rejected,
        outcome @ Outcome::GuessMatch(_) => {
            if outcome.confirm(probe).is_none() {
                ProbeResult::FalseGuess
            } else {
                ProbeResult::Failure(format!("'{probe}' confirmed as a reserved word"))
            }
        }
        Outcome::Match(word) => ProbeResult::Failure(format!(
            "'{probe}' matched '{}' ({})",
            word.text(),
            word.index()
        )),
    }
}

/// Distinct non-words: substitutions first, then random strings
fn build_probes(tree: &DecisionTree, config: &VerifyConfig) -> Vec<String> {
    let known: FxHashSet<&str> = tree.words().iter().map(|w| w.text()).collect();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut probes = Vec::new();

    for word in tree.words() {
        for column in 0..word.len() {
            for letter in b'a'..=b'z' {
                if letter == word.char_at(column) {
                    continue;
                }
                let mut bytes = word.text().as_bytes().to_vec();
                bytes[column] = letter;
                let probe = String::from_utf8_lossy(&bytes).into_owned();
                if !known.contains(probe.as_str()) && seen.insert(probe.clone()) {
                    probes.push(probe);
                }
            }
        }
    }

    let lengths: Vec<usize> = tree
        .words()
        .iter()
        .map(ReservedWord::len)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let mut rng = StdRng::seed_from_u64(config.seed);

    for _ in 0..config.random_probes {
        let Some(&length) = lengths.choose(&mut rng) else {
            break;
        };
        let probe: String = (0..length)
            .map(|_| char::from(rng.random_range(b'a'..=b'z')))
            .collect();
        if !known.contains(probe.as_str()) && seen.insert(probe.clone()) {
            probes.push(probe);
        }
    }

    probes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;
    use crate::wordlists::loader::default_words;

    fn quick() -> VerifyConfig {
        VerifyConfig {
            random_probes: 500,
            seed: 7,
            show_progress: false,
        }
    }

    #[test]
    fn default_list_verifies() {
        let words = default_words(&[]).unwrap();
        let tree = Generator::default().build(&words).unwrap();

        let report = run_verify(&tree, &quick());

        assert!(report.passed(), "failures: {:?}", report.failures);
        assert_eq!(report.words_checked, words.len());
        assert!(report.words_guessed > 0);
        assert!(report.false_guesses > 0);
    }

    #[test]
    fn substitutions_cover_every_column() {
        let words = vec![ReservedWord::new(0, "do").unwrap()];
        let tree = Generator::default().build(&words).unwrap();

        let probes = build_probes(
            &tree,
            &VerifyConfig {
                random_probes: 0,
                ..quick()
            },
        );

        // 25 substitutions per column
        assert_eq!(probes.len(), 50);
        assert!(probes.iter().all(|p| p.len() == 2 && p != "do"));
    }

    #[test]
    fn probes_are_deterministic_per_seed() {
        let words = default_words(&[]).unwrap();
        let tree = Generator::default().build(&words).unwrap();

        assert_eq!(build_probes(&tree, &quick()), build_probes(&tree, &quick()));
    }

    #[test]
    fn short_words_produce_no_false_guesses() {
        let words = vec![
            ReservedWord::new(0, "if").unwrap(),
            ReservedWord::new(1, "in").unwrap(),
            ReservedWord::new(2, "int").unwrap(),
        ];
        let tree = Generator::default().build(&words).unwrap();

        let report = run_verify(&tree, &quick());

        assert!(report.passed());
        assert_eq!(report.words_guessed, 0);
        assert_eq!(report.false_guesses, 0);
    }
}
