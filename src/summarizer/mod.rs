//! Extractive summarization
//!
//! [`Summarizer`] runs the stages in order: split the document into
//! sentences, count informative words, score sentences by summed word
//! frequency, then select the best ones in document order.

pub mod frequency;
pub mod scorer;
pub mod selector;

use serde::Serialize;

use crate::config::SummaryConfig;
use crate::error::{Error, Result};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{split_sentences, word_count};
use frequency::WordFrequency;
use scorer::score_sentences;
use selector::{LengthPolicy, SelectedSentence, SentenceSelector};

/// Number of keywords reported with each summary.
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// Enter a tracing span for one summarization stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("summarize_stage", stage = $name).entered();
    };
}

/// Outcome of summarizing one document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    /// Selected sentences joined by single spaces
    pub text: String,
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    /// Number of sentences in the original document
    pub total_sentences: usize,
    /// Word and punctuation tokens in the original document
    pub original_word_count: usize,
    /// Word and punctuation tokens in the summary
    pub summary_word_count: usize,
    /// Most frequent informative words of the document
    pub keywords: Vec<String>,
}

impl Summary {
    /// Check if no sentence was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Summary length relative to the original, in tokens
    pub fn compression_ratio(&self) -> f64 {
        if self.original_word_count == 0 {
            1.0
        } else {
            self.summary_word_count as f64 / self.original_word_count as f64
        }
    }
}

/// Word-frequency extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer<'a> {
    stopwords: &'a StopwordFilter,
    policy: LengthPolicy,
    max_input_chars: Option<usize>,
    keyword_count: usize,
}

impl Summarizer<'static> {
    /// Summarizer over the shared English stopword list
    pub fn english() -> Self {
        Self::new(StopwordFilter::english())
    }
}

impl<'a> Summarizer<'a> {
    /// Create a summarizer with the default length policy
    pub fn new(stopwords: &'a StopwordFilter) -> Self {
        Self {
            stopwords,
            policy: LengthPolicy::default(),
            max_input_chars: None,
            keyword_count: DEFAULT_KEYWORD_COUNT,
        }
    }

    /// Create from a validated configuration.
    ///
    /// `stopwords` is usually built with [`SummaryConfig::stopword_filter`].
    pub fn from_config(config: &SummaryConfig, stopwords: &'a StopwordFilter) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(stopwords)
            .with_policy(config.length.policy())
            .with_max_input_chars(config.runtime.max_input_chars))
    }

    /// Replace the length policy used when no sentence count is given
    pub fn with_policy(mut self, policy: LengthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reject documents longer than `max` characters
    pub fn with_max_input_chars(mut self, max: Option<usize>) -> Self {
        self.max_input_chars = max;
        self
    }

    /// Set how many keywords each summary reports
    pub fn with_keyword_count(mut self, n: usize) -> Self {
        self.keyword_count = n;
        self
    }

    /// The active length policy
    pub fn policy(&self) -> LengthPolicy {
        self.policy
    }

    /// Summarize `text`.
    ///
    /// With `num_sentences` set, that many sentences are selected (capped at
    /// the document's sentence count); otherwise the length policy decides.
    /// Empty or whitespace-only input yields an empty summary.
    pub fn summarize(&self, text: &str, num_sentences: Option<usize>) -> Result<Summary> {
        if let Some(max) = self.max_input_chars {
            let len = text.chars().count();
            if len > max {
                tracing::warn!(len, max, "rejecting oversized document");
                return Err(Error::ProcessingFailed(format!(
                    "document of {len} characters exceeds the {max} character limit"
                )));
            }
        }

        if text.trim().is_empty() {
            return Ok(Summary::default());
        }

        let sentences = {
            trace_stage!("tokenize");
            split_sentences(text)
        };

        let freq = {
            trace_stage!("frequency");
            WordFrequency::from_text(text, self.stopwords)
        };

        let scores = {
            trace_stage!("score");
            score_sentences(&sentences, &freq)
        };

        let k = num_sentences.unwrap_or_else(|| self.policy.target_sentences(sentences.len()));
        let result = {
            trace_stage!("select");
            SentenceSelector::new()
                .with_num_sentences(k)
                .select(&scores, &sentences)
        };

        let summary_text = result.text();
        let summary = Summary {
            original_word_count: word_count(text),
            summary_word_count: word_count(&summary_text),
            text: summary_text,
            total_sentences: sentences.len(),
            keywords: freq
                .top_words(self.keyword_count)
                .into_iter()
                .map(|(word, _)| word)
                .collect(),
            sentences: result.sentences,
        };

        tracing::debug!(
            total_sentences = summary.total_sentences,
            selected = summary.sentences.len(),
            original_words = summary.original_word_count,
            summary_words = summary.summary_word_count,
            "summarized document"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "The cat sat. Dogs and cats and dogs play in parks. Parks are nice.";

    #[test]
    fn test_picks_most_informative_sentence() {
        let summary = Summarizer::english().summarize(DOC, Some(1)).unwrap();

        assert_eq!(summary.text, "Dogs and cats and dogs play in parks.");
        assert_eq!(summary.total_sentences, 3);
    }

    #[test]
    fn test_dashes_do_not_outweigh_content() {
        let text = "Inflation \u{2014} rates \u{2014} growth \u{2014} jobs. Inflation rates growth jobs policy.";
        let summary = Summarizer::english().summarize(text, Some(1)).unwrap();

        assert_eq!(summary.text, "Inflation rates growth jobs policy.");
        assert!(!summary.keywords.iter().any(|k| k == "\u{2014}"));
    }

    #[test]
    fn test_empty_input() {
        let summary = Summarizer::english().summarize("", None).unwrap();
        assert_eq!(summary.text, "");
        assert!(summary.is_empty());

        let summary = Summarizer::english().summarize("  \n ", Some(3)).unwrap();
        assert_eq!(summary.text, "");
        assert_eq!(summary.original_word_count, 0);
    }

    #[test]
    fn test_policy_minimum_keeps_short_documents_whole() {
        let summary = Summarizer::english().summarize(DOC, None).unwrap();

        assert_eq!(summary.text, DOC);
        assert_eq!(summary.summary_word_count, summary.original_word_count);
        assert!((summary.compression_ratio() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_policy_quarter_of_long_documents() {
        let doc: String = (0..20)
            .map(|i| format!("Reporters covered story number {i} today."))
            .collect::<Vec<_>>()
            .join(" ");
        let summary = Summarizer::english().summarize(&doc, None).unwrap();

        assert_eq!(summary.total_sentences, 20);
        assert_eq!(summary.sentences.len(), 5);
    }

    #[test]
    fn test_custom_policy() {
        let policy = LengthPolicy {
            min_sentences: 1,
            divisor: 4,
        };
        let summary = Summarizer::english()
            .with_policy(policy)
            .summarize(DOC, None)
            .unwrap();

        assert_eq!(summary.sentences.len(), 1);
    }

    #[test]
    fn test_input_limit() {
        let summarizer = Summarizer::english().with_max_input_chars(Some(10));
        let err = summarizer.summarize(DOC, None).unwrap_err();

        assert!(matches!(err, Error::ProcessingFailed(_)));
        assert!(summarizer.summarize("Short.", None).is_ok());
    }

    #[test]
    fn test_keywords() {
        let summary = Summarizer::english()
            .with_keyword_count(2)
            .summarize(DOC, Some(1))
            .unwrap();

        assert_eq!(summary.keywords, vec!["dogs", "parks"]);
    }

    #[test]
    fn test_from_config() {
        let config = SummaryConfig::from_json(r#"{ "length": { "min_sentences": 1 } }"#).unwrap();
        let stopwords = config.stopword_filter().unwrap();
        let summarizer = Summarizer::from_config(&config, &stopwords).unwrap();

        assert_eq!(summarizer.policy().min_sentences, 1);
        let summary = summarizer.summarize(DOC, None).unwrap();
        assert_eq!(summary.sentences.len(), 1);
    }
}
