//! General statistical-pipeline adapter
//!
//! Loads a per-language pipeline model from the model store and hosts it
//! with the dependency parser excluded: sentence boundary detection only
//! needs the lightweight sentencizer component. Tokens come back annotated
//! with part-of-speech tag and lemma.

use std::collections::HashSet;

use crate::backend::split::{split_sentences, split_words, SplitRules};
use crate::backend::Segment;
use crate::error::{CoreError, Result};
use crate::language;
use crate::models::{ModelStore, PipelineModel};
use crate::token::{SentenceCandidate, Token};

/// Marks that stay word-internal for pipeline tokenization
const INTERIOR_MARKS: [char; 2] = ['\'', '-'];

/// Attribute-style token produced by the pipeline runtime
#[derive(Debug, Clone)]
pub(crate) struct PipelineToken {
    pub text: String,
    pub tag: String,
    pub lemma: String,
}

/// In-process runtime hosting a serialized pipeline model
#[derive(Debug)]
pub(crate) struct PipelineRuntime {
    language: String,
    active_components: Vec<String>,
    terminators: Vec<char>,
    closers: Vec<char>,
    abbreviations: HashSet<String>,
    model: PipelineModel,
}

impl PipelineRuntime {
    /// Host a model with the parser excluded and the sentencizer enabled
    pub(crate) fn host(model: PipelineModel) -> Self {
        let mut active_components: Vec<String> = model
            .components
            .iter()
            .filter(|c| c.as_str() != "parser")
            .cloned()
            .collect();
        if !active_components.iter().any(|c| c == "sentencizer") {
            active_components.push("sentencizer".to_string());
        }
        log::debug!(
            "hosting '{}' pipeline with components {:?}",
            model.language,
            active_components
        );
        Self {
            language: model.language.clone(),
            active_components,
            terminators: model.sentencizer.terminators.clone(),
            closers: model.sentencizer.closers.clone(),
            abbreviations: model
                .sentencizer
                .abbreviations
                .iter()
                .map(|a| a.to_lowercase())
                .collect(),
            model,
        }
    }

    /// The language the hosted model was trained for
    pub(crate) fn language(&self) -> &str {
        &self.language
    }

    /// Components the runtime activated when hosting the model
    pub(crate) fn active_components(&self) -> &[String] {
        &self.active_components
    }

    /// Run the hosted pipeline over one line
    pub(crate) fn process(&self, line: &str) -> Vec<Vec<PipelineToken>> {
        let rules = SplitRules {
            terminators: &self.terminators,
            closers: &self.closers,
            abbreviations: &self.abbreviations,
        };
        split_sentences(line, &rules)
            .into_iter()
            .map(|sentence| {
                split_words(&sentence, &INTERIOR_MARKS)
                    .into_iter()
                    .map(|surface| self.annotate(surface))
                    .collect()
            })
            .collect()
    }

    fn annotate(&self, surface: String) -> PipelineToken {
        match self.model.lexicon.get(&surface) {
            Some(entry) => PipelineToken {
                text: surface,
                tag: entry.tag.clone(),
                lemma: entry.lemma.clone(),
            },
            None => PipelineToken {
                tag: self.model.fallback_tag.clone(),
                lemma: surface.to_lowercase(),
                text: surface,
            },
        }
    }
}

/// The statistical-pipeline adapter
#[derive(Debug)]
pub struct StatisticalTokenizer {
    runtime: PipelineRuntime,
}

impl StatisticalTokenizer {
    /// Load the model mapped to a language from the store
    pub fn new(language: &str, store: &ModelStore) -> Result<Self> {
        let model_name =
            language::statistical_model(language).ok_or_else(|| CoreError::UnsupportedLanguage {
                backend: "statistical".to_string(),
                language: language.to_string(),
            })?;
        let path = store.statistical_model_path(model_name);
        if !path.is_file() {
            return Err(CoreError::ResourceUnavailable {
                backend: "statistical".to_string(),
                language: language.to_string(),
                hint: format!(
                    "download the '{model_name}' model and place it at {}",
                    path.display()
                ),
            });
        }
        let model = PipelineModel::load(&path)?;
        Ok(Self {
            runtime: PipelineRuntime::host(model),
        })
    }

    /// The language of the loaded model
    pub fn language(&self) -> &str {
        self.runtime.language()
    }

    /// Pipeline components active in the hosted model
    pub fn pipeline_components(&self) -> &[String] {
        self.runtime.active_components()
    }
}

impl Segment for StatisticalTokenizer {
    fn segment(&self, line: &str) -> Result<Vec<SentenceCandidate>> {
        let candidates = self
            .runtime
            .process(line)
            .into_iter()
            .map(|sentence| {
                SentenceCandidate::new(
                    sentence
                        .into_iter()
                        .map(|t| Token::annotated(t.text, t.tag, t.lemma))
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
    use std::fs;
    use tempfile::TempDir;

    fn store_with_english_model() -> (TempDir, ModelStore) {
        let dir = TempDir::new().unwrap();
        let store = ModelStore::new(dir.path());
        let model_dir = dir.path().join("statistical");
        fs::create_dir_all(&model_dir).unwrap();
        fs::write(
            model_dir.join("en_core_sm.json"),
            r#"{
                "language": "en",
                "components": ["tokenizer", "tagger", "parser", "lemmatizer"],
                "sentencizer": {"terminators": [".", "!", "?"], "abbreviations": ["mr", "dr"]},
                "lexicon": {
                    "walked": {"tag": "VERB", "lemma": "walk"},
                    "Smith": {"tag": "PROPN", "lemma": "Smith"}
                },
                "fallback_tag": "X"
            }"#,
        )
        .unwrap();
        (dir, store)
    }

    #[test]
    fn test_parser_component_is_excluded() {
        let (_dir, store) = store_with_english_model();
        let tokenizer = StatisticalTokenizer::new("en", &store).unwrap();
        let components = tokenizer.pipeline_components();
        assert!(!components.iter().any(|c| c == "parser"));
        assert!(components.iter().any(|c| c == "sentencizer"));
    }

    #[test]
    fn test_segment_annotates_from_lexicon() {
        let (_dir, store) = store_with_english_model();
        let tokenizer = StatisticalTokenizer::new("en", &store).unwrap();
        let candidates = tokenizer.segment("Smith walked home.").unwrap();

        assert_eq!(candidates.len(), 1);
        let tokens = candidates[0].tokens();
        assert_eq!(tokens[0].tag.as_deref(), Some("PROPN"));
        assert_eq!(tokens[1].lemma.as_deref(), Some("walk"));
        // "home" is not in the lexicon
        assert_eq!(tokens[2].tag.as_deref(), Some("X"));
        assert_eq!(tokens[2].lemma.as_deref(), Some("home"));
    }

    #[test]
    fn test_unmapped_language() {
        let (_dir, store) = store_with_english_model();
        let err = StatisticalTokenizer::new("tlh", &store).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedLanguage { .. }));
    }

    #[test]
    fn test_missing_model_reports_remediation() {
        let dir = TempDir::new().unwrap();
        let store = ModelStore::new(dir.path());
        let err = StatisticalTokenizer::new("en", &store).unwrap_err();
        match err {
            CoreError::ResourceUnavailable { hint, .. } => {
                assert!(hint.contains("en_core_sm"));
            }
            other => panic!("expected ResourceUnavailable, got {other:?}"),
        }
    }
}
