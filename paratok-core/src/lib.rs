//! Backend-agnostic sentence and word segmentation
//!
//! This crate turns raw line-oriented text into a paragraph/sentence/word
//! document with stable identifiers. Whichever tokenizer backend performs
//! the actual segmentation, the assembled tree has one uniform shape.

#![warn(missing_docs)]

pub mod backend;
pub mod builder;
pub mod dispatcher;
pub mod document;
pub mod error;
pub mod language;
pub mod models;
pub mod token;
pub mod xml;

// Re-export key types
pub use backend::{Segment, Tokenizer, TokenizerKind};
pub use builder::DocumentBuilder;
pub use dispatcher::{Dispatcher, DispatcherConfig, RunSummary};
pub use document::{Document, Paragraph, Sentence, Word};
pub use error::{CoreError, Result};
pub use models::ModelStore;
pub use token::{SentenceCandidate, Token};
