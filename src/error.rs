//! Error types for ladle.
//!
//! Only fatal input errors propagate to the caller. Per-line tagging or
//! matching failures are logged and skipped, and a page with no recognizable
//! ingredient block yields an empty result rather than an error.

/// Error type for extraction and lexicon operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTML input could not be interpreted as a document.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// Character encoding detection or conversion failed.
    #[error("Encoding detection failed: {0}")]
    EncodingError(String),

    /// The tagger returned malformed output for a line.
    #[error("Tagging failed: {0}")]
    TaggingError(String),

    /// Reading or writing a persisted lexicon table failed.
    #[error("Lexicon I/O failed: {0}")]
    LexiconError(#[from] std::io::Error),
}

/// Result type alias for extraction and lexicon operations.
pub type Result<T> = std::result::Result<T, Error>;
