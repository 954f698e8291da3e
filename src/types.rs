//! Core data types shared across the tokenizer, scorer and selector.

use serde::Serialize;

/// A sentence of the input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Sentence text, trimmed of surrounding whitespace
    pub text: String,
    /// Byte offset (inclusive) of the trimmed text in the document
    pub start: usize,
    /// Byte offset (exclusive) of the trimmed text in the document
    pub end: usize,
    /// Position of the sentence in the document (0-based)
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// Informativeness score of one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredSentence {
    /// Position of the scored sentence in the document
    pub index: usize,
    /// Sum of word frequencies of the sentence's non-stopword tokens
    pub score: u64,
}
