//! Word list loading utilities
//!
//! Reads word lists from files and normalises entries to the upper-case form
//! stored on the board.

use std::fs;
use std::io;
use std::path::Path;

/// Normalise a raw entry: trimmed, ASCII letters only, upper-cased
///
/// Returns `None` for blank lines and entries with any other character.
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::normalize;
///
/// assert_eq!(normalize(" crane "), Some("CRANE".to_string()));
/// assert_eq!(normalize("cr4ne"), None);
/// assert_eq!(normalize(""), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

/// Load words from a file, one per line
///
/// Invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize).collect())
}

/// Convert an embedded string slice to normalised words
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::words_from_slice;
/// use wordle_engine::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}
