//! Summarizer configuration.
//!
//! A [`SummaryConfig`] selects the stopword language, the target length
//! policy and runtime limits. All fields are optional; omitted fields take
//! the defaults below.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "language": "en",
//!   "length": { "min_sentences": 3, "divisor": 4 },
//!   "stopwords": { "add": ["reuters"], "remove": [] },
//!   "runtime": { "max_input_chars": 200000 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::nlp::stopwords::{Language, StopwordFilter};
use crate::summarizer::selector::{LengthPolicy, DEFAULT_LENGTH_DIVISOR, DEFAULT_MIN_SENTENCES};

/// Current configuration format version.
pub const CONFIG_VERSION: u32 = 1;

/// Top-level summarizer configuration (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Config version (currently `1`).
    #[serde(default = "default_version")]
    pub v: u32,

    /// Stopword language, as a short code or English name.
    #[serde(default = "default_language")]
    pub language: String,

    /// Target summary length policy.
    #[serde(default)]
    pub length: LengthSpec,

    /// Adjustments to the language's stopword list.
    #[serde(default)]
    pub stopwords: StopwordSpec,

    /// Runtime execution limits.
    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_language() -> String {
    Language::English.code().to_string()
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            v: CONFIG_VERSION,
            language: default_language(),
            length: LengthSpec::default(),
            stopwords: StopwordSpec::default(),
            runtime: RuntimeSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

/// Target summary length: `max(min_sentences, sentences / divisor)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthSpec {
    /// Lower bound on the number of selected sentences.
    #[serde(default = "default_min_sentences")]
    pub min_sentences: usize,

    /// Long documents keep about `sentences / divisor` sentences.
    #[serde(default = "default_divisor")]
    pub divisor: usize,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

fn default_min_sentences() -> usize {
    DEFAULT_MIN_SENTENCES
}

fn default_divisor() -> usize {
    DEFAULT_LENGTH_DIVISOR
}

impl Default for LengthSpec {
    fn default() -> Self {
        Self {
            min_sentences: DEFAULT_MIN_SENTENCES,
            divisor: DEFAULT_LENGTH_DIVISOR,
            unknown_fields: HashMap::new(),
        }
    }
}

impl LengthSpec {
    /// The length policy this section describes.
    pub fn policy(&self) -> LengthPolicy {
        LengthPolicy {
            min_sentences: self.min_sentences,
            divisor: self.divisor,
        }
    }
}

/// Extra stopwords to add to, or remove from, the language list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordSpec {
    #[serde(default)]
    pub add: Vec<String>,

    #[serde(default)]
    pub remove: Vec<String>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Runtime execution limits (fail-fast guards).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Maximum input length in characters before rejecting.
    #[serde(default)]
    pub max_input_chars: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl SummaryConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.v != CONFIG_VERSION {
            problems.push(format!(
                "unsupported config version {} (expected {CONFIG_VERSION})",
                self.v
            ));
        }
        if Language::parse(&self.language).is_none() {
            problems.push(format!("unsupported language '{}'", self.language));
        }
        if self.length.divisor == 0 {
            problems.push("length.divisor must be >= 1".to_string());
        }
        if self.runtime.max_input_chars == Some(0) {
            problems.push("runtime.max_input_chars must be >= 1".to_string());
        }

        let unknown = self.unknown_field_paths();
        if !unknown.is_empty() {
            if self.strict {
                problems.push(format!("unknown fields: {}", unknown.join(", ")));
            } else {
                tracing::warn!(fields = %unknown.join(", "), "ignoring unknown config fields");
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidConfig(problems.join("; ")))
        }
    }

    /// The configured stopword language.
    pub fn language(&self) -> Result<Language> {
        self.language.parse()
    }

    /// Build the stopword filter this configuration describes.
    pub fn stopword_filter(&self) -> Result<StopwordFilter> {
        let mut filter = StopwordFilter::new(self.language()?);
        filter.add_stopwords(&self.stopwords.add);
        filter.remove_stopwords(&self.stopwords.remove);
        Ok(filter)
    }

    fn unknown_field_paths(&self) -> Vec<String> {
        let nested = [
            ("length", &self.length.unknown_fields),
            ("stopwords", &self.stopwords.unknown_fields),
            ("runtime", &self.runtime.unknown_fields),
        ];
        let mut paths: Vec<String> = self.unknown_fields.keys().cloned().collect();
        for (section, fields) in nested {
            paths.extend(fields.keys().map(|key| format!("{section}.{key}")));
        }
        paths.sort();
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let config = SummaryConfig::from_json("{}").unwrap();
        assert_eq!(config.v, 1);
        assert_eq!(config.language, "en");
        assert_eq!(config.length.policy(), LengthPolicy::default());
        assert!(config.runtime.max_input_chars.is_none());
        assert!(!config.strict);
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "v": 1,
            "language": "german",
            "length": { "min_sentences": 2, "divisor": 5 },
            "stopwords": { "add": ["reuters"], "remove": ["nicht"] },
            "runtime": { "max_input_chars": 1000 },
            "strict": true
        }"#;
        let config = SummaryConfig::from_json(json).unwrap();
        assert_eq!(config.language().unwrap(), Language::German);
        assert_eq!(config.length.min_sentences, 2);
        assert_eq!(config.length.divisor, 5);
        assert_eq!(config.runtime.max_input_chars, Some(1000));

        let filter = config.stopword_filter().unwrap();
        assert!(filter.is_stopword("Reuters"));
        assert!(!filter.is_stopword("nicht"));
        assert!(filter.is_stopword("und"));
    }

    #[test]
    fn test_partial_length_uses_defaults() {
        let config = SummaryConfig::from_json(r#"{ "length": { "divisor": 2 } }"#).unwrap();
        assert_eq!(config.length.min_sentences, 3);
        assert_eq!(config.length.divisor, 2);
    }

    #[test]
    fn test_unknown_fields_captured() {
        let json = r#"{ "bogus_top_level": 42, "runtime": { "bogus_limit": 1 } }"#;
        let config = SummaryConfig::from_json(json).unwrap();
        assert!(config.unknown_fields.contains_key("bogus_top_level"));
        assert!(config.runtime.unknown_fields.contains_key("bogus_limit"));
    }

    #[test]
    fn test_strict_rejects_unknown_fields() {
        let json = r#"{ "strict": true, "bogus": 1, "runtime": { "max_tokens": 5 } }"#;
        let err = SummaryConfig::from_json(json).unwrap_err();
        let Error::InvalidConfig(msg) = err else {
            panic!("expected InvalidConfig");
        };
        assert!(msg.contains("bogus"));
        assert!(msg.contains("runtime.max_tokens"));
    }

    #[test]
    fn test_strict_rejects_misspelled_length_field() {
        let json = r#"{ "strict": true, "length": { "min_sentense": 1 } }"#;
        let err = SummaryConfig::from_json(json).unwrap_err();
        let Error::InvalidConfig(msg) = err else {
            panic!("expected InvalidConfig");
        };
        assert!(msg.contains("length.min_sentense"));
    }

    #[test]
    fn test_lenient_keeps_length_defaults_for_unknown_field() {
        let config = SummaryConfig::from_json(r#"{ "length": { "min_sentense": 1 } }"#).unwrap();
        assert!(config.length.unknown_fields.contains_key("min_sentense"));
        assert_eq!(config.length.policy(), LengthPolicy::default());
    }

    #[test]
    fn test_validation_collects_all_problems() {
        let json = r#"{ "v": 2, "language": "xx", "length": { "divisor": 0 } }"#;
        let err = SummaryConfig::from_json(json).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("version 2"));
        assert!(msg.contains("'xx'"));
        assert!(msg.contains("divisor"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SummaryConfig::from_json("{ not json"),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_default_matches_empty_document() {
        let parsed = SummaryConfig::from_json("{}").unwrap();
        let default = SummaryConfig::default();
        assert_eq!(parsed.v, default.v);
        assert_eq!(parsed.language, default.language);
        assert_eq!(parsed.length.policy(), default.length.policy());
        assert_eq!(parsed.strict, default.strict);
    }
}
