//! # news-summarizer
//!
//! Extractive summarization of news articles. The most informative
//! sentences, scored by the document-wide frequency of their non-stopword
//! words, are selected and returned in their original order.
//!
//! ```rust
//! use news_summarizer::summarize;
//!
//! let text = "The cat sat. Dogs and cats and dogs play in parks. Parks are nice.";
//! let summary = summarize(text, Some(1))?;
//! assert_eq!(summary.text, "Dogs and cats and dogs play in parks.");
//! # Ok::<(), news_summarizer::Error>(())
//! ```

mod error;

/// Configuration loading and validation.
pub mod config;

/// Tokenization and stopword filtering.
pub mod nlp;

/// Frequency counting, sentence scoring and selection.
pub mod summarizer;

/// Sentence and score types.
pub mod types;

pub use config::SummaryConfig;
pub use error::{Error, Result};
pub use nlp::stopwords::{Language, StopwordFilter};
pub use summarizer::selector::LengthPolicy;
pub use summarizer::{Summarizer, Summary};
pub use types::{ScoredSentence, Sentence};

/// Summarize `text` with the English stopword list.
///
/// `num_sentences` overrides the default length policy
/// (`max(3, sentences / 4)`).
pub fn summarize(text: &str, num_sentences: Option<usize>) -> Result<Summary> {
    Summarizer::english().summarize(text, num_sentences)
}

/// Sentence count the default length policy targets for a document of
/// `total_sentences` sentences.
pub fn target_sentence_count(total_sentences: usize) -> usize {
    LengthPolicy::default().target_sentences(total_sentences)
}
