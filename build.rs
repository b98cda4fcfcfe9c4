//! Build script to embed the vocabulary files
//!
//! Reads the newline-delimited word lists under `data/` and generates Rust
//! source with `&[&str]` constants.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/vocabulary.txt",
        &Path::new(&out_dir).join("vocabulary.rs"),
        "VOCABULARY",
        "Every guessable word",
    );

    generate_word_list(
        "data/answers.txt",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Words the game may pick as the hidden answer",
    );

    println!("cargo:rerun-if-changed=data/vocabulary.txt");
    println!("cargo:rerun-if-changed=data/answers.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
