//! Build script to embed the game's word lists
//!
//! Reads `data/answers.txt` and `data/allowed.txt`, rejects malformed
//! entries, checks that every answer is guessable, and writes const arrays
//! for `src/wordlists/embedded.rs` to include.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const ANSWERS_PATH: &str = "data/answers.txt";
const ALLOWED_PATH: &str = "data/allowed.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    let answers = read_words(ANSWERS_PATH);
    let allowed = read_words(ALLOWED_PATH);

    let guessable: HashSet<&str> = allowed.iter().map(String::as_str).collect();
    let missing: Vec<&str> = answers
        .iter()
        .map(String::as_str)
        .filter(|word| !guessable.contains(word))
        .collect();
    assert!(
        missing.is_empty(),
        "{ANSWERS_PATH} has words missing from {ALLOWED_PATH}: {missing:?}"
    );

    write_const(
        &out_dir.join("answers.rs"),
        "ANSWERS",
        "Words eligible as the secret answer",
        &answers,
    );
    write_const(
        &out_dir.join("allowed.rs"),
        "ALLOWED",
        "All words accepted as guesses",
        &allowed,
    );

    println!("cargo:rerun-if-changed={ANSWERS_PATH}");
    println!("cargo:rerun-if-changed={ALLOWED_PATH}");
}

/// Non-empty lines, each a lowercase ASCII word, without duplicates
fn read_words(path: &str) -> Vec<String> {
    let content =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));

    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        assert!(
            word.bytes().all(|b| b.is_ascii_lowercase()),
            "{path}:{}: '{word}' is not a lowercase ASCII word",
            number + 1
        );
        if seen.insert(word) {
            words.push(word.to_string());
        }
    }
    words
}

fn write_const(output_path: &Path, const_name: &str, doc_comment: &str, words: &[String]) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
}
