//! Build script to embed the default reserved-word list
//!
//! Reads the word list file and generates Rust source code with a const array
//! of raw entry lines. Parsing happens at runtime through the same reader used
//! for external files.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_entry_list(
        "data/reserved_words.txt",
        &Path::new(&out_dir).join("reserved_words.rs"),
        "DEFAULT_ENTRIES",
        "JavaScript reserved words and contextual keywords",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/reserved_words.txt");
}

fn generate_entry_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let lines: Vec<&str> = content.lines().map(str::trim).collect();
    let count = lines.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated reserved-word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} (raw word-list lines)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for line in lines {
        writeln!(output, "    {line:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of raw lines in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
