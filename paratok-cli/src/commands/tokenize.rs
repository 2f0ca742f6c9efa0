//! Tokenize command implementation

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use paratok_core::{Dispatcher, DispatcherConfig, RunSummary, TokenizerKind};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input;
use crate::progress::ProgressReporter;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file for a single input, or directory for several
    /// (default: next to each input with an .xml extension)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Tokenizer backend
    #[arg(short, long, value_enum)]
    pub tokenizer: Option<TokenizerChoice>,

    /// Language code
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Model store directory for the statistical and neural backends
    #[arg(long, value_name = "DIR")]
    pub model_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Tokenizer backend selector
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TokenizerChoice {
    /// External toolkit invoked as a subprocess
    External,
    /// Rule-based sentence and word splitting
    Rules,
    /// Statistical pipeline with tag/lemma annotation
    Statistical,
    /// Neural pipeline with tag/lemma annotation
    Neural,
    /// No tokenization here, defer to a downstream stage
    Passthrough,
}

impl TokenizerChoice {
    /// The core selector this choice maps to
    pub fn kind(&self) -> TokenizerKind {
        match self {
            TokenizerChoice::External => TokenizerKind::External,
            TokenizerChoice::Rules => TokenizerKind::Rules,
            TokenizerChoice::Statistical => TokenizerKind::Statistical,
            TokenizerChoice::Neural => TokenizerKind::Neural,
            TokenizerChoice::Passthrough => TokenizerKind::Passthrough,
        }
    }
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let tokenizer = match self.tokenizer {
            Some(choice) => choice.kind(),
            None => file_config
                .tokenize
                .default_tokenizer
                .parse::<TokenizerKind>()
                .map_err(CliError::ConfigError)?,
        };
        let language = self
            .language
            .clone()
            .unwrap_or_else(|| file_config.tokenize.default_language.clone());
        let model_dir = self
            .model_dir
            .clone()
            .unwrap_or_else(|| file_config.models.dir.clone());

        log::info!("tokenizing with '{tokenizer}' for language '{language}'");

        let files = input::resolve_patterns(&self.input)?;
        let multiple = files.len() > 1;
        if multiple {
            if let Some(output) = &self.output {
                if output.exists() && !output.is_dir() {
                    return Err(CliError::OutputConflict(format!(
                        "{} must be a directory when processing several inputs",
                        output.display()
                    ))
                    .into());
                }
                fs::create_dir_all(output).with_context(|| {
                    format!("Failed to create output directory: {}", output.display())
                })?;
            }
        }

        let mut config = DispatcherConfig::new(tokenizer, language).with_model_dir(model_dir);
        if let Some(command) = file_config.external.command {
            config = config.with_external_command(command);
        }
        let dispatcher = Dispatcher::new(config)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for file in &files {
            let output = input::output_path_for(file, self.output.as_deref(), multiple);
            let summary = dispatcher
                .run(file, &output)
                .with_context(|| format!("Failed to process {}", file.display()))?;
            match summary {
                RunSummary::Document {
                    paragraphs,
                    sentences,
                    words,
                } => log::info!(
                    "{}: {paragraphs} paragraphs, {sentences} sentences, {words} words",
                    output.display()
                ),
                RunSummary::Delegated => {
                    log::info!("{}: written by the external tool", output.display())
                }
                RunSummary::Skipped => log::info!("{}: skipped", file.display()),
            }
            progress.file_completed(&file.display().to_string());
        }
        progress.finish();

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
