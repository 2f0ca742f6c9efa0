//! Error types for the segmentation pipeline

use thiserror::Error;

/// Errors surfaced by the segmentation core
///
/// All failures are fatal to the current run; no retry or partial-document
/// recovery happens anywhere in this crate.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The requested (backend, language) pair has no resource mapping
    #[error("tokenization with '{backend}' not available for language '{language}'")]
    UnsupportedLanguage {
        /// The backend that was asked to handle the language
        backend: String,
        /// The language code without a mapping
        language: String,
    },

    /// A required model exists in the mapping but could not be obtained
    #[error("model for language '{language}' not available for '{backend}': {hint}")]
    ResourceUnavailable {
        /// The backend whose model is missing
        backend: String,
        /// The language the model was requested for
        language: String,
        /// How to obtain the missing resource
        hint: String,
    },

    /// The external tokenizer process failed or produced no usable output
    ///
    /// The external adapter itself discards subprocess diagnostics; this
    /// variant exists for callers that inspect the output afterwards.
    #[error("external tokenizer failed: {reason}")]
    ExternalToolFailure {
        /// What was observed about the failure
        reason: String,
    },

    /// A model artifact was present but could not be parsed
    #[error("malformed model artifact: {0}")]
    Model(String),

    /// Persisted document could not be written or read back
    #[error("document format error: {0}")]
    Xml(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Io(err.to_string())
    }
}

impl From<quick_xml::Error> for CoreError {
    fn from(err: quick_xml::Error) -> Self {
        CoreError::Xml(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Model(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
