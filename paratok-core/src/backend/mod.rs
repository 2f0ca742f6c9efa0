//! Tokenizer backends
//!
//! Four adapter families produce sentence candidates for the builder; a
//! fifth selector value defers tokenization to a downstream stage. The
//! backends differ only in how they obtain their token sequences; at this
//! module's boundary everything is the same `{surface, tag, lemma}` shape.

pub mod external;
pub mod neural;
pub mod rules;
mod split;
pub mod statistical;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use external::ExternalTokenizer;
pub use neural::NeuralTokenizer;
pub use rules::RulesTokenizer;
pub use statistical::StatisticalTokenizer;

use crate::error::Result;
use crate::models::ModelStore;
use crate::token::SentenceCandidate;

/// Capability interface conformed to by every in-process adapter
///
/// Adapters are deterministic for a given input and configuration, never
/// see blank lines (filtered upstream), and share no mutable state across
/// calls.
pub trait Segment {
    /// Segment one non-blank input line into sentence candidates
    fn segment(&self, line: &str) -> Result<Vec<SentenceCandidate>>;
}

/// The five named backend selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// External toolkit invoked as a subprocess, writing output itself
    External,
    /// Rule-based sentence and word splitting
    Rules,
    /// Statistical pipeline with tag and lemma annotation
    Statistical,
    /// Neural pipeline, composed with the statistical runtime when possible
    Neural,
    /// No tokenization here; a downstream stage consumes the plain text
    Passthrough,
}

impl TokenizerKind {
    /// All selector values in declaration order
    pub const ALL: [TokenizerKind; 5] = [
        TokenizerKind::External,
        TokenizerKind::Rules,
        TokenizerKind::Statistical,
        TokenizerKind::Neural,
        TokenizerKind::Passthrough,
    ];

    /// The configuration string for this selector
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizerKind::External => "external",
            TokenizerKind::Rules => "rules",
            TokenizerKind::Statistical => "statistical",
            TokenizerKind::Neural => "neural",
            TokenizerKind::Passthrough => "passthrough",
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenizerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "external" => Ok(TokenizerKind::External),
            "rules" => Ok(TokenizerKind::Rules),
            "statistical" => Ok(TokenizerKind::Statistical),
            "neural" => Ok(TokenizerKind::Neural),
            "passthrough" => Ok(TokenizerKind::Passthrough),
            other => Err(format!("unknown tokenizer backend: {other}")),
        }
    }
}

/// An in-process tokenizer, selected once at startup
///
/// New backends are added as variants here, never by branching deeper in
/// the pipeline.
#[derive(Debug)]
pub enum Tokenizer {
    /// Rule-based adapter
    Rules(RulesTokenizer),
    /// Statistical-pipeline adapter
    Statistical(StatisticalTokenizer),
    /// Neural-pipeline adapter
    Neural(NeuralTokenizer),
}

impl Tokenizer {
    /// Create the rule-based adapter
    pub fn rules(language: &str) -> Result<Self> {
        Ok(Tokenizer::Rules(RulesTokenizer::new(language)?))
    }

    /// Create the statistical-pipeline adapter
    pub fn statistical(language: &str, store: &ModelStore) -> Result<Self> {
        Ok(Tokenizer::Statistical(StatisticalTokenizer::new(
            language, store,
        )?))
    }

    /// Create the neural-pipeline adapter
    pub fn neural(language: &str, store: &ModelStore) -> Result<Self> {
        Ok(Tokenizer::Neural(NeuralTokenizer::new(language, store)?))
    }

    /// Which selector this adapter belongs to
    pub fn kind(&self) -> TokenizerKind {
        match self {
            Tokenizer::Rules(_) => TokenizerKind::Rules,
            Tokenizer::Statistical(_) => TokenizerKind::Statistical,
            Tokenizer::Neural(_) => TokenizerKind::Neural,
        }
    }
}

impl Segment for Tokenizer {
    fn segment(&self, line: &str) -> Result<Vec<SentenceCandidate>> {
        match self {
            Tokenizer::Rules(adapter) => adapter.segment(line),
            Tokenizer::Statistical(adapter) => adapter.segment(line),
            Tokenizer::Neural(adapter) => adapter.segment(line),
        }
    }
}
