//! Document-wide word frequencies
//!
//! Counts every normalized, non-stopword token of a document. Tokens without
//! a letter or digit (dashes, curly quotes, ellipses) never count. These
//! counts are the only signal the scorer uses.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{is_punctuation, split_words};

/// Occurrence counts of informative words across a document
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    /// Lowercase word -> occurrence count
    counts: FxHashMap<String, u32>,
}

impl WordFrequency {
    /// Create an empty frequency table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the non-stopword tokens of `text`
    pub fn from_text(text: &str, stopwords: &StopwordFilter) -> Self {
        let mut freq = Self::new();
        freq.count(text, stopwords);
        freq
    }

    /// Add the non-stopword tokens of `text` to the table
    pub fn count(&mut self, text: &str, stopwords: &StopwordFilter) {
        for word in split_words(text) {
            if !is_punctuation(&word) && !stopwords.is_stopword(&word) {
                *self.counts.entry(word).or_insert(0) += 1;
            }
        }
    }

    /// Occurrence count of `word`, 0 when absent
    pub fn get(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Check if `word` was counted at least once
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no informative word was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(word, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// The `n` most frequent words, ties broken alphabetically
    pub fn top_words(&self, n: usize) -> Vec<(String, u32)> {
        let mut words: Vec<(&str, u32)> = self.iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words
            .into_iter()
            .take(n)
            .map(|(word, count)| (word.to_string(), count))
            .collect()
    }
}

/// Count the non-stopword tokens of `text`
pub fn word_frequency(text: &str, stopwords: &StopwordFilter) -> WordFrequency {
    WordFrequency::from_text(text, stopwords)
}
