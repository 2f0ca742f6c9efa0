//! Canonical token records at the adapter boundary
//!
//! Every backend, whatever its internal token representation, hands the
//! builder tokens in exactly this shape.

use serde::{Deserialize, Serialize};

/// One token as produced by a backend adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appeared in the input
    pub surface: String,
    /// Part-of-speech tag, absent for raw tokenization backends
    pub tag: Option<String>,
    /// Lemma, absent for raw tokenization backends
    pub lemma: Option<String>,
}

impl Token {
    /// Create a raw token without linguistic annotation
    pub fn new(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: None,
            lemma: None,
        }
    }

    /// Create a token with part-of-speech tag and lemma
    pub fn annotated(
        surface: impl Into<String>,
        tag: impl Into<String>,
        lemma: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            tag: Some(tag.into()),
            lemma: Some(lemma.into()),
        }
    }
}

/// A backend's proposed sentence: an ordered run of tokens
///
/// Candidates are proposals, not final sentences; the builder's merge
/// safeguard decides whether a candidate opens a new sentence or continues
/// the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentenceCandidate {
    tokens: Vec<Token>,
}

impl SentenceCandidate {
    /// Create a candidate from tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The tokens in order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the candidate, yielding its tokens
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the candidate holds no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<Token>> for SentenceCandidate {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_token_has_no_annotation() {
        let token = Token::new("walked");
        assert_eq!(token.surface, "walked");
        assert!(token.tag.is_none());
        assert!(token.lemma.is_none());
    }

    #[test]
    fn test_annotated_token() {
        let token = Token::annotated("walked", "VERB", "walk");
        assert_eq!(token.tag.as_deref(), Some("VERB"));
        assert_eq!(token.lemma.as_deref(), Some("walk"));
    }

    #[test]
    fn test_candidate_len() {
        let candidate = SentenceCandidate::new(vec![Token::new("a"), Token::new("b")]);
        assert_eq!(candidate.len(), 2);
        assert!(!candidate.is_empty());
        assert!(SentenceCandidate::default().is_empty());
    }
}
