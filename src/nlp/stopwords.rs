//! Stopword filtering
//!
//! Stopwords come from the `stop-words` crate for the configured language,
//! extended with ASCII punctuation so that punctuation tokens never count
//! towards a sentence's score.

use std::str::FromStr;
use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::error::Error;

/// ASCII punctuation symbols, each treated as a stopword token.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Languages with a bundled stopword list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
    Swedish,
    Norwegian,
    Danish,
    Finnish,
    Hungarian,
    Turkish,
    Polish,
    Arabic,
}

impl Language {
    /// Parse a short code (`"en"`) or English name (`"english"`)
    pub fn parse(value: &str) -> Option<Self> {
        let lang = match value.trim().to_lowercase().as_str() {
            "en" | "english" => Self::English,
            "de" | "german" => Self::German,
            "fr" | "french" => Self::French,
            "es" | "spanish" => Self::Spanish,
            "it" | "italian" => Self::Italian,
            "pt" | "portuguese" => Self::Portuguese,
            "nl" | "dutch" => Self::Dutch,
            "ru" | "russian" => Self::Russian,
            "sv" | "swedish" => Self::Swedish,
            "no" | "norwegian" => Self::Norwegian,
            "da" | "danish" => Self::Danish,
            "fi" | "finnish" => Self::Finnish,
            "hu" | "hungarian" => Self::Hungarian,
            "tr" | "turkish" => Self::Turkish,
            "pl" | "polish" => Self::Polish,
            "ar" | "arabic" => Self::Arabic,
            _ => return None,
        };
        Some(lang)
    }

    /// Two-letter ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::Italian => "it",
            Self::Portuguese => "pt",
            Self::Dutch => "nl",
            Self::Russian => "ru",
            Self::Swedish => "sv",
            Self::Norwegian => "no",
            Self::Danish => "da",
            Self::Finnish => "fi",
            Self::Hungarian => "hu",
            Self::Turkish => "tr",
            Self::Polish => "pl",
            Self::Arabic => "ar",
        }
    }

    fn word_list(self) -> LANGUAGE {
        match self {
            Self::English => LANGUAGE::English,
            Self::German => LANGUAGE::German,
            Self::French => LANGUAGE::French,
            Self::Spanish => LANGUAGE::Spanish,
            Self::Italian => LANGUAGE::Italian,
            Self::Portuguese => LANGUAGE::Portuguese,
            Self::Dutch => LANGUAGE::Dutch,
            Self::Russian => LANGUAGE::Russian,
            Self::Swedish => LANGUAGE::Swedish,
            Self::Norwegian => LANGUAGE::Norwegian,
            Self::Danish => LANGUAGE::Danish,
            Self::Finnish => LANGUAGE::Finnish,
            Self::Hungarian => LANGUAGE::Hungarian,
            Self::Turkish => LANGUAGE::Turkish,
            Self::Polish => LANGUAGE::Polish,
            Self::Arabic => LANGUAGE::Arabic,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
            .ok_or_else(|| Error::InvalidConfig(format!("unsupported language '{value}'")))
    }
}

/// A set of stopwords and punctuation tokens excluded from scoring
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Lowercase stopwords plus one entry per punctuation symbol
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl StopwordFilter {
    /// Build the filter for a language, punctuation included
    pub fn new(language: Language) -> Self {
        let mut stopwords: FxHashSet<String> = get(language.word_list())
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        stopwords.extend(PUNCTUATION.chars().map(String::from));
        Self { stopwords }
    }

    /// The process-wide English filter, built on first use
    pub fn english() -> &'static StopwordFilter {
        static ENGLISH: OnceLock<StopwordFilter> = OnceLock::new();
        ENGLISH.get_or_init(|| StopwordFilter::new(Language::English))
    }

    /// Create a stopword filter from a custom list (no punctuation added)
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.stopwords.contains(&word.to_lowercase())
        } else {
            self.stopwords.contains(word)
        }
    }

    /// Get the number of entries in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
