//! Code generation command
//!
//! Loads a word list, generates the recognizer switch and writes it to a file
//! or stdout.

use crate::generator::{Generator, TreeStats};
use crate::wordlists::loader::load_source;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};

/// Output name selecting stdout
pub const STDOUT: &str = "-";

/// Parameters for a generation run
pub struct GenerateConfig {
    /// Output path, or `-` for stdout
    pub output: String,
    /// Word list path, or `default` for the embedded list
    pub source: String,
    /// Arguments forwarded verbatim to the word list reader
    pub reader_args: Vec<String>,
}

/// Result of a generation run
pub struct GenerateResult {
    pub output: String,
    pub words: usize,
    pub bytes: usize,
    pub stats: TreeStats,
}

/// Generate the switch for `config.source` and write it to `config.output`
///
/// The output file is only created once the code has been fully generated.
///
/// # Errors
///
/// Returns an error if the word list cannot be loaded, generation fails, or
/// the output cannot be written.
pub fn run_generate(generator: &Generator, config: &GenerateConfig) -> Result<GenerateResult> {
    let words = load_source(&config.source, &config.reader_args)
        .with_context(|| format!("Failed to load reserved words from '{}'", config.source))?;

    let mut code = Vec::new();
    let tree = generator
        .generate(&words, &mut code)
        .context("Failed to generate reserved word switch")?;

    if config.output == STDOUT {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&code).context("Failed to write to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
    } else {
        fs::write(&config.output, &code)
            .with_context(|| format!("Failed to write '{}'", config.output))?;
    }

    Ok(GenerateResult {
        output: config.output.clone(),
        words: tree.words().len(),
        bytes: code.len(),
        stats: tree.stats(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn writes_file_for_default_list() {
        let path = env::temp_dir().join(format!("reserved_switch_{}.inc", std::process::id()));
        let config = GenerateConfig {
            output: path.display().to_string(),
            source: "default".to_string(),
            reader_args: vec![],
        };

        let result = run_generate(&Generator::default(), &config).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(result.words, 54);
        assert_eq!(result.bytes, written.len());
        assert!(written.contains("GUESS_MATCH("));
        assert!(written.contains("MATCH(20) /* if */"));
    }

    #[test]
    fn missing_source_creates_no_output() {
        let path = env::temp_dir().join(format!("reserved_switch_missing_{}.inc", std::process::id()));
        let config = GenerateConfig {
            output: path.display().to_string(),
            source: "/nonexistent/words.txt".to_string(),
            reader_args: vec![],
        };

        assert!(run_generate(&Generator::default(), &config).is_err());
        assert!(!path.exists());
    }
}
