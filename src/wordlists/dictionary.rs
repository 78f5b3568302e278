//! In-memory word list backing both the dictionary and the answer picker

use super::loader::{normalize, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::engine::Dictionary;
use rustc_hash::FxHashSet;

/// An ordered, de-duplicated list of upper-case words with fast lookup
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a list from raw entries, skipping invalid ones and duplicates
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        list.extend(entries);
        list
    }

    /// Every word accepted as a guess
    #[must_use]
    pub fn allowed() -> Self {
        Self::new(words_from_slice(ALLOWED))
    }

    /// Words eligible as the secret answer
    #[must_use]
    pub fn answers() -> Self {
        Self::new(words_from_slice(ANSWERS))
    }

    /// Add more entries, keeping first-seen order
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in entries.into_iter().filter_map(|e| normalize(e.as_ref())) {
            if self.index.insert(word.clone()) {
                self.words.push(word);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words with exactly `characters` letters
    #[must_use]
    pub fn with_length(&self, characters: usize) -> Vec<String> {
        self.words
            .iter()
            .filter(|w| w.len() == characters)
            .cloned()
            .collect()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        if word.bytes().all(|b| b.is_ascii_uppercase()) {
            self.index.contains(word)
        } else {
            self.index.contains(&word.to_ascii_uppercase())
        }
    }
}
