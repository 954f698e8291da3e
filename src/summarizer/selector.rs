//! Top-k sentence selection for summarization
//!
//! Picks the highest-scoring sentences and restores document order, so a
//! summary always reads as a subsequence of the original text.

use serde::Serialize;

use crate::types::{ScoredSentence, Sentence};

/// Default lower bound on the number of selected sentences.
pub const DEFAULT_MIN_SENTENCES: usize = 3;

/// Default divisor: long documents keep about a quarter of their sentences.
pub const DEFAULT_LENGTH_DIVISOR: usize = 4;

/// Policy deriving the target sentence count from the document length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    /// Lower bound on the number of sentences to select
    pub min_sentences: usize,
    /// Select roughly `total / divisor` sentences for long documents
    pub divisor: usize,
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self {
            min_sentences: DEFAULT_MIN_SENTENCES,
            divisor: DEFAULT_LENGTH_DIVISOR,
        }
    }
}

impl LengthPolicy {
    /// `max(min_sentences, total / divisor)`; a zero divisor counts as 1
    pub fn target_sentences(&self, total: usize) -> usize {
        self.min_sentences.max(total / self.divisor.max(1))
    }
}

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { num_sentences: 3 }
    }
}

/// Result of sentence selection
#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryResult {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    /// Sum of the selected sentences' scores
    pub total_score: u64,
}

impl SummaryResult {
    /// Summary text: the selected sentences joined by single spaces
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if no sentence was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A selected sentence with its score
#[derive(Debug, Clone, Serialize)]
pub struct SelectedSentence {
    /// The sentence
    pub sentence: Sentence,
    /// Summed word frequency of the sentence
    pub score: u64,
}

/// Greedy top-k sentence selector
#[derive(Debug, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Select the `min(num_sentences, sentences.len())` best sentences.
    ///
    /// `scores[i]` scores `sentences[i]`; a missing score counts as 0.
    /// Equal scores are resolved in favor of the earlier sentence.
    pub fn select(&self, scores: &[ScoredSentence], sentences: &[Sentence]) -> SummaryResult {
        let k = self.config.num_sentences.min(sentences.len());
        if k == 0 {
            return SummaryResult::default();
        }

        let mut ranked: Vec<(usize, u64)> = (0..sentences.len())
            .map(|pos| (pos, scores.get(pos).map_or(0, |s| s.score)))
            .collect();
        // Stable, and ties fall back to position: earliest sentence wins.
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(k);

        // Sort by document order
        ranked.sort_by_key(|&(pos, _)| pos);

        let sentences: Vec<SelectedSentence> = ranked
            .into_iter()
            .map(|(pos, score)| SelectedSentence {
                sentence: sentences[pos].clone(),
                score,
            })
            .collect();
        let total_score = sentences.iter().map(|s| s.score).sum();

        SummaryResult {
            sentences,
            total_score,
        }
    }
}

/// Select the `k` best sentences and return them in document order
pub fn select_top(scores: &[ScoredSentence], sentences: &[Sentence], k: usize) -> Vec<Sentence> {
    SentenceSelector::new()
        .with_num_sentences(k)
        .select(scores, sentences)
        .sentences
        .into_iter()
        .map(|s| s.sentence)
        .collect()
}
