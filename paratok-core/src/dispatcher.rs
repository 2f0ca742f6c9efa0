//! Backend selection and the file-level segmentation pipeline
//!
//! The dispatcher resolves the configured backend and language once at
//! startup, validating compatibility before any processing begins, then
//! runs one of three control paths per file: delegate to the external
//! tool, assemble the tree from an in-process adapter's per-line output,
//! or do nothing for the passthrough selector.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::backend::{ExternalTokenizer, Segment, Tokenizer, TokenizerKind};
use crate::builder::DocumentBuilder;
use crate::error::Result;
use crate::language;
use crate::models::ModelStore;
use crate::xml;

/// Configuration consumed by the dispatcher
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Which backend performs the segmentation
    pub tokenizer: TokenizerKind,
    /// Language code, used for resource lookup and the external tool's
    /// language-specific rule path
    pub language: String,
    /// Root of the model store for the statistical and neural backends
    pub model_dir: PathBuf,
    /// Command template override for the external backend
    pub external_command: Option<String>,
}

impl DispatcherConfig {
    /// Configuration with the default model store location
    pub fn new(tokenizer: TokenizerKind, language: impl Into<String>) -> Self {
        Self {
            tokenizer,
            language: language.into(),
            model_dir: PathBuf::from("models"),
            external_command: None,
        }
    }

    /// Use a different model store root
    pub fn with_model_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.model_dir = dir.into();
        self
    }

    /// Override the external tool invocation
    pub fn with_external_command(mut self, template: impl Into<String>) -> Self {
        self.external_command = Some(template.into());
        self
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunSummary {
    /// Tree assembled in-process and serialized
    Document {
        /// Number of paragraphs in the output
        paragraphs: usize,
        /// Number of sentences in the output
        sentences: usize,
        /// Number of words in the output
        words: usize,
    },
    /// Output written by the external tool
    Delegated,
    /// Nothing to do for this backend
    Skipped,
}

/// One configured segmentation pipeline
#[derive(Debug)]
pub struct Dispatcher {
    config: DispatcherConfig,
    tokenizer: Option<Tokenizer>,
}

impl Dispatcher {
    /// Select and construct the configured backend
    ///
    /// Backend/language compatibility is validated here, and in-process
    /// adapters load their resources here, so incompatible configurations
    /// fail before any input is read or output created.
    pub fn new(config: DispatcherConfig) -> Result<Self> {
        language::validate(config.tokenizer, &config.language)?;

        let store = ModelStore::new(&config.model_dir);
        let tokenizer = match config.tokenizer {
            TokenizerKind::Rules => Some(Tokenizer::rules(&config.language)?),
            TokenizerKind::Statistical => Some(Tokenizer::statistical(&config.language, &store)?),
            TokenizerKind::Neural => Some(Tokenizer::neural(&config.language, &store)?),
            TokenizerKind::External | TokenizerKind::Passthrough => None,
        };

        Ok(Self { config, tokenizer })
    }

    /// The selected backend
    pub fn kind(&self) -> TokenizerKind {
        self.config.tokenizer
    }

    /// Segment one input file into one output file
    pub fn run(&self, input: &Path, output: &Path) -> Result<RunSummary> {
        match self.config.tokenizer {
            TokenizerKind::External => {
                log::info!("using external tokenization");
                let adapter = ExternalTokenizer::new(
                    &self.config.language,
                    self.config.external_command.clone(),
                );
                adapter.run(input, output)?;
                Ok(RunSummary::Delegated)
            }
            TokenizerKind::Passthrough => {
                log::info!("passthrough selected, leaving {} untouched", input.display());
                Ok(RunSummary::Skipped)
            }
            _ => {
                let tokenizer = self
                    .tokenizer
                    .as_ref()
                    .expect("in-process backend constructed at startup");
                log::info!("using {} tokenization", tokenizer.kind());
                let document = self.build_document(tokenizer, input)?;
                xml::write_document_to_file(&document, output)?;
                Ok(RunSummary::Document {
                    paragraphs: document.paragraphs.len(),
                    sentences: document.sentence_count(),
                    words: document.word_count(),
                })
            }
        }
    }

    /// One streaming pass: lines in input order, blank lines opening
    /// paragraphs, non-blank lines segmented and folded into the tree
    fn build_document(
        &self,
        tokenizer: &Tokenizer,
        input: &Path,
    ) -> Result<crate::document::Document> {
        let file = File::open(input)?;
        let reader = BufReader::new(file);
        let mut builder = DocumentBuilder::new();

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                builder.start_paragraph();
            } else {
                builder.push_candidates(tokenizer.segment(trimmed)?);
            }
        }
        Ok(builder.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_incompatible_pair_fails_before_any_processing() {
        let err = Dispatcher::new(DispatcherConfig::new(TokenizerKind::Rules, "ja")).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedLanguage { .. }));
    }

    #[test]
    fn test_rules_run_end_to_end() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.xml");
        fs::write(&input, "Hello world. Good bye.\n").unwrap();

        let dispatcher =
            Dispatcher::new(DispatcherConfig::new(TokenizerKind::Rules, "en")).unwrap();
        let summary = dispatcher.run(&input, &output).unwrap();

        assert_eq!(
            summary,
            RunSummary::Document {
                paragraphs: 1,
                sentences: 2,
                words: 6,
            }
        );
        let xml_text = fs::read_to_string(&output).unwrap();
        assert!(xml_text.contains("<s id=\"s1.2\">"));
    }

    #[test]
    fn test_passthrough_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.xml");
        fs::write(&input, "content\n").unwrap();

        let dispatcher =
            Dispatcher::new(DispatcherConfig::new(TokenizerKind::Passthrough, "en")).unwrap();
        assert_eq!(dispatcher.run(&input, &output).unwrap(), RunSummary::Skipped);
        assert!(!output.exists());
    }

    #[test]
    fn test_blank_lines_delimit_paragraphs() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.xml");
        fs::write(&input, "First paragraph.\n\nSecond paragraph.\n").unwrap();

        let dispatcher =
            Dispatcher::new(DispatcherConfig::new(TokenizerKind::Rules, "en")).unwrap();
        let summary = dispatcher.run(&input, &output).unwrap();
        assert_eq!(
            summary,
            RunSummary::Document {
                paragraphs: 2,
                sentences: 2,
                words: 6,
            }
        );
    }
}
