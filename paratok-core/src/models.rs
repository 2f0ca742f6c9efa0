//! Model store layout and serialized pipeline artifacts
//!
//! The statistical and neural backends load their per-language resources
//! from a model store directory. Fetching models into the store is an
//! external concern; this module only locates and parses what is already
//! there.
//!
//! Layout:
//!
//! ```text
//! <root>/statistical/<model-name>.json   serialized pipeline model
//! <root>/neural/<lang>/pipeline.json     manifest hosted by the pipeline runtime
//! <root>/neural/<lang>/model.json        native-runtime model
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Locator for model artifacts on disk
#[derive(Debug, Clone)]
pub struct ModelStore {
    root: PathBuf,
}

impl ModelStore {
    /// Create a store rooted at a directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a statistical pipeline model artifact
    pub fn statistical_model_path(&self, model_name: &str) -> PathBuf {
        self.root
            .join("statistical")
            .join(format!("{model_name}.json"))
    }

    /// Directory of a neural model package for a language
    pub fn neural_package_dir(&self, language: &str) -> PathBuf {
        self.root.join("neural").join(language)
    }
}

/// A serialized statistical pipeline model
///
/// The artifact is opaque to callers; the adapter decides which components
/// to activate when hosting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineModel {
    /// Language the model was trained for
    pub language: String,
    /// Pipeline components shipped with the model
    #[serde(default)]
    pub components: Vec<String>,
    /// Rule component used for sentence boundary detection
    pub sentencizer: SentencizerRules,
    /// Surface form lookup for tag and lemma annotation
    #[serde(default)]
    pub lexicon: HashMap<String, LexiconEntry>,
    /// Tag assigned to surfaces missing from the lexicon
    #[serde(default = "default_fallback_tag")]
    pub fallback_tag: String,
}

fn default_fallback_tag() -> String {
    "X".to_string()
}

/// Sentence boundary rules carried by a pipeline model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentencizerRules {
    /// Characters that may end a sentence
    pub terminators: Vec<char>,
    /// Closing marks kept attached to the preceding sentence
    #[serde(default)]
    pub closers: Vec<char>,
    /// Abbreviations whose trailing dot is not a boundary
    #[serde(default)]
    pub abbreviations: Vec<String>,
}

/// Per-surface annotation entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Part-of-speech tag
    pub tag: String,
    /// Lemma
    pub lemma: String,
}

impl PipelineModel {
    /// Parse a model artifact from disk
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_paths() {
        let store = ModelStore::new("/srv/models");
        assert_eq!(
            store.statistical_model_path("en_core_sm"),
            Path::new("/srv/models/statistical/en_core_sm.json")
        );
        assert_eq!(
            store.neural_package_dir("fi"),
            Path::new("/srv/models/neural/fi")
        );
    }

    #[test]
    fn test_pipeline_model_parses_with_defaults() {
        let json = r#"{
            "language": "en",
            "sentencizer": {"terminators": ["."]}
        }"#;
        let model: PipelineModel = serde_json::from_str(json).unwrap();
        assert!(model.components.is_empty());
        assert!(model.lexicon.is_empty());
        assert_eq!(model.fallback_tag, "X");
    }

    #[test]
    fn test_pipeline_model_roundtrips_lexicon() {
        let json = r#"{
            "language": "en",
            "components": ["tokenizer", "tagger", "parser", "lemmatizer"],
            "sentencizer": {"terminators": [".", "!"], "abbreviations": ["mr"]},
            "lexicon": {"walked": {"tag": "VERB", "lemma": "walk"}}
        }"#;
        let model: PipelineModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.lexicon["walked"].lemma, "walk");
        assert_eq!(model.components.len(), 4);
    }
}
