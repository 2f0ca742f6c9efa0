//! Rule-based tokenizer adapter
//!
//! Sentence splitting followed by word splitting using fixed,
//! language-parametrized rules. Rulesets are embedded TOML, one per
//! supported language. This adapter has no notion of part-of-speech or
//! lemma; its tokens carry the surface form only.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::backend::split::{split_sentences, split_words, SplitRules};
use crate::backend::Segment;
use crate::error::{CoreError, Result};
use crate::token::{SentenceCandidate, Token};

/// A language's fixed segmentation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ruleset {
    /// Language identification
    pub metadata: RulesetMetadata,
    /// Sentence boundary rules
    pub sentences: SentenceRules,
    /// Word splitting rules
    pub words: WordRules,
}

/// Language identification for a ruleset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesetMetadata {
    /// Language code the ruleset applies to
    pub code: String,
    /// Human-readable language name
    pub name: String,
}

/// Sentence boundary rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceRules {
    /// Characters that may end a sentence
    pub terminators: Vec<char>,
    /// Closing marks kept attached to the preceding sentence
    #[serde(default)]
    pub closers: Vec<char>,
    /// Abbreviations (lowercased) whose trailing dot is not a boundary
    #[serde(default)]
    pub abbreviations: Vec<String>,
}

/// Word splitting rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRules {
    /// Marks that stay word-internal between alphanumerics
    #[serde(default)]
    pub interior: Vec<char>,
}

/// Embedded rulesets, keyed by language code and full name
static EMBEDDED: OnceLock<HashMap<&'static str, Arc<Ruleset>>> = OnceLock::new();

const EMBEDDED_SOURCES: &[(&str, &str, &str)] = &[
    ("en", "english", include_str!("../../configs/rules/english.toml")),
    ("de", "german", include_str!("../../configs/rules/german.toml")),
    ("fr", "french", include_str!("../../configs/rules/french.toml")),
    ("es", "spanish", include_str!("../../configs/rules/spanish.toml")),
    ("it", "italian", include_str!("../../configs/rules/italian.toml")),
    ("nl", "dutch", include_str!("../../configs/rules/dutch.toml")),
    (
        "pt",
        "portuguese",
        include_str!("../../configs/rules/portuguese.toml"),
    ),
];

fn embedded() -> &'static HashMap<&'static str, Arc<Ruleset>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();
        for (code, name, source) in EMBEDDED_SOURCES {
            match toml::from_str::<Ruleset>(source) {
                Ok(ruleset) => {
                    let ruleset = Arc::new(ruleset);
                    map.insert(*code, ruleset.clone());
                    map.insert(*name, ruleset);
                }
                Err(e) => {
                    log::warn!("failed to parse embedded ruleset for '{code}': {e}");
                }
            }
        }
        map
    })
}

/// Look up the embedded ruleset for a language code or name
pub fn ruleset_for(language: &str) -> Option<Arc<Ruleset>> {
    embedded().get(language.to_lowercase().as_str()).cloned()
}

/// Language codes with an embedded ruleset
pub fn ruleset_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = EMBEDDED_SOURCES.iter().map(|(code, _, _)| *code).collect();
    codes.sort_unstable();
    codes
}

/// The rule-based adapter
#[derive(Debug, Clone)]
pub struct RulesTokenizer {
    ruleset: Arc<Ruleset>,
    abbreviations: HashSet<String>,
}

impl RulesTokenizer {
    /// Create an adapter for a language, failing when no ruleset exists
    pub fn new(language: &str) -> Result<Self> {
        let ruleset = ruleset_for(language).ok_or_else(|| CoreError::UnsupportedLanguage {
            backend: "rules".to_string(),
            language: language.to_string(),
        })?;
        let abbreviations = ruleset
            .sentences
            .abbreviations
            .iter()
            .map(|a| a.to_lowercase())
            .collect();
        Ok(Self {
            ruleset,
            abbreviations,
        })
    }

    /// The language name the active ruleset was written for
    pub fn language_name(&self) -> &str {
        &self.ruleset.metadata.name
    }
}

impl Segment for RulesTokenizer {
    fn segment(&self, line: &str) -> Result<Vec<SentenceCandidate>> {
        let rules = SplitRules {
            terminators: &self.ruleset.sentences.terminators,
            closers: &self.ruleset.sentences.closers,
            abbreviations: &self.abbreviations,
        };
        let candidates = split_sentences(line, &rules)
            .into_iter()
            .map(|sentence| {
                SentenceCandidate::new(
                    split_words(&sentence, &self.ruleset.words.interior)
                        .into_iter()
                        .map(Token::new)
                        .collect(),
                )
            })
            .collect();
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_embedded_rulesets_parse() {
        for (code, name, _) in EMBEDDED_SOURCES {
            let ruleset = ruleset_for(code).unwrap_or_else(|| panic!("missing ruleset: {code}"));
            assert_eq!(&ruleset.metadata.code, code);
            assert!(ruleset_for(name).is_some());
        }
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let err = RulesTokenizer::new("tlh").unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedLanguage { .. }));
    }

    #[test]
    fn test_language_name_lookup_is_case_insensitive() {
        assert!(RulesTokenizer::new("English").is_ok());
    }

    #[test]
    fn test_segment_splits_sentences_and_words() {
        let tokenizer = RulesTokenizer::new("en").unwrap();
        let candidates = tokenizer.segment("Hello world. Good bye.").unwrap();

        assert_eq!(candidates.len(), 2);
        let first: Vec<&str> = candidates[0]
            .tokens()
            .iter()
            .map(|t| t.surface.as_str())
            .collect();
        assert_eq!(first, ["Hello", "world", "."]);
        assert!(candidates[0].tokens().iter().all(|t| t.tag.is_none()));
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let tokenizer = RulesTokenizer::new("en").unwrap();
        let candidates = tokenizer.segment("Dr. Smith went home.").unwrap();
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_tokens_carry_no_annotation() {
        let tokenizer = RulesTokenizer::new("de").unwrap();
        let candidates = tokenizer.segment("Es regnet heute.").unwrap();
        for token in candidates[0].tokens() {
            assert!(token.tag.is_none());
            assert!(token.lemma.is_none());
        }
    }
}
