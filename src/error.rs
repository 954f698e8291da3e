//! Error types for news-summarizer.
//!
//! Summarization itself only ever fails with [`Error::ProcessingFailed`];
//! configuration problems are reported separately so callers can fix them
//! before serving any text.

/// Error type for configuration and summarization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The configuration was rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Summarization of a document failed.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}

impl Error {
    /// Generic message suitable for showing to an end user.
    ///
    /// Internal details stay in the `Display` output for logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "The summarizer is misconfigured.",
            Self::ProcessingFailed(_) => "Unable to summarize the provided text.",
        }
    }
}

/// Result type alias for summarizer operations.
pub type Result<T> = std::result::Result<T, Error>;
