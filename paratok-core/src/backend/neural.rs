//! Neural-pipeline adapter
//!
//! Verifies that the per-language model package is present in the store,
//! then prefers hosting the package's pipeline manifest in the statistical
//! runtime for a unified interface. Packages without a manifest fall back
//! to the backend's native runtime, whose token records are string-keyed
//! maps rather than typed structs; both shapes are normalized into [`Token`]
//! before they leave this module.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::split::{split_sentences, split_words, SplitRules};
use crate::backend::statistical::PipelineRuntime;
use crate::backend::Segment;
use crate::error::{CoreError, Result};
use crate::models::{ModelStore, PipelineModel};
use crate::token::{SentenceCandidate, Token};

const INTERIOR_MARKS: [char; 2] = ['\'', '-'];

/// The neural-pipeline adapter
#[derive(Debug)]
pub struct NeuralTokenizer {
    runtime: NeuralRuntime,
}

#[derive(Debug)]
enum NeuralRuntime {
    /// Manifest hosted in the statistical pipeline runtime
    Combined(PipelineRuntime),
    /// The backend's own runtime
    Native(NativeRuntime),
}

impl NeuralTokenizer {
    /// Open the model package for a language, ensuring it is present
    pub fn new(language: &str, store: &ModelStore) -> Result<Self> {
        let package_dir = store.neural_package_dir(language);
        if !package_dir.is_dir() {
            return Err(CoreError::ResourceUnavailable {
                backend: "neural".to_string(),
                language: language.to_string(),
                hint: format!(
                    "fetch the '{language}' model package into {}",
                    package_dir.display()
                ),
            });
        }

        let manifest_path = package_dir.join("pipeline.json");
        let runtime = if manifest_path.is_file() {
            let manifest = PipelineModel::load(&manifest_path)?;
            log::debug!("neural package for '{language}' hosted via pipeline runtime");
            NeuralRuntime::Combined(PipelineRuntime::host(manifest))
        } else {
            let native_path = package_dir.join("model.json");
            if !native_path.is_file() {
                return Err(CoreError::ResourceUnavailable {
                    backend: "neural".to_string(),
                    language: language.to_string(),
                    hint: format!(
                        "package at {} is missing pipeline.json or model.json",
                        package_dir.display()
                    ),
                });
            }
            log::debug!("neural package for '{language}' running on the native runtime");
            NeuralRuntime::Native(NativeRuntime::load(&native_path)?)
        };

        Ok(Self { runtime })
    }

    /// Whether the adapter composed with the pipeline runtime
    pub fn is_combined(&self) -> bool {
        matches!(self.runtime, NeuralRuntime::Combined(_))
    }
}

impl Segment for NeuralTokenizer {
    fn segment(&self, line: &str) -> Result<Vec<SentenceCandidate>> {
        // Normalize both runtime shapes into Token here; neither the
        // attribute-style nor the mapping-style records leave the adapter.
        let candidates = match &self.runtime {
            NeuralRuntime::Combined(pipeline) => pipeline
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
                .collect(),
            NeuralRuntime::Native(native) => native
                .process(line)
                .into_iter()
                .map(|sentence| {
                    SentenceCandidate::new(sentence.into_iter().map(normalize_record).collect())
                })
                .collect(),
        };
        Ok(candidates)
    }
}

fn normalize_record(record: serde_json::Map<String, Value>) -> Token {
    let surface = record
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let tag = record
        .get("upos")
        .and_then(Value::as_str)
        .map(str::to_string);
    let lemma = record
        .get("lemma")
        .and_then(Value::as_str)
        .map(str::to_string);
    Token {
        surface,
        tag,
        lemma,
    }
}

/// Serialized native model
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NativeModel {
    lang: String,
    sentence_breaks: Vec<char>,
    #[serde(default)]
    trailing: Vec<char>,
    #[serde(default)]
    no_break_after: Vec<String>,
    #[serde(default)]
    vocab: HashMap<String, Value>,
    #[serde(default = "default_upos")]
    default_upos: String,
}

fn default_upos() -> String {
    "X".to_string()
}

/// The backend's own runtime, emitting mapping-style token records
#[derive(Debug)]
struct NativeRuntime {
    model: NativeModel,
    abbreviations: HashSet<String>,
}

impl NativeRuntime {
    fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let model: NativeModel = serde_json::from_str(&data)?;
        log::debug!("loaded native '{}' model from {}", model.lang, path.display());
        let abbreviations = model
            .no_break_after
            .iter()
            .map(|a| a.to_lowercase())
            .collect();
        Ok(Self {
            model,
            abbreviations,
        })
    }

    fn process(&self, line: &str) -> Vec<Vec<serde_json::Map<String, Value>>> {
        let rules = SplitRules {
            terminators: &self.model.sentence_breaks,
            closers: &self.model.trailing,
            abbreviations: &self.abbreviations,
        };
        split_sentences(line, &rules)
            .into_iter()
            .map(|sentence| {
                split_words(&sentence, &INTERIOR_MARKS)
                    .into_iter()
                    .map(|surface| self.record_for(surface))
                    .collect()
            })
            .collect()
    }

    fn record_for(&self, surface: String) -> serde_json::Map<String, Value> {
        let mut record = match self.model.vocab.get(&surface) {
            Some(Value::Object(map)) => map.clone(),
            _ => serde_json::Map::new(),
        };
        if !record.contains_key("upos") {
            record.insert("upos".to_string(), Value::String(self.model.default_upos.clone()));
        }
        if !record.contains_key("lemma") {
            record.insert("lemma".to_string(), Value::String(surface.to_lowercase()));
        }
        record.insert("text".to_string(), Value::String(surface));
        record
    }
}
