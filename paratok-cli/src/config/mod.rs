//! Configuration module

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Tokenization defaults
    #[serde(default)]
    pub tokenize: TokenizeConfig,

    /// Model store configuration
    #[serde(default)]
    pub models: ModelsConfig,

    /// External tool configuration
    #[serde(default)]
    pub external: ExternalConfig,
}

/// Tokenization-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct TokenizeConfig {
    /// Default backend when none is given on the command line
    pub default_tokenizer: String,

    /// Default language code
    pub default_language: String,
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            default_tokenizer: "rules".to_string(),
            default_language: "en".to_string(),
        }
    }
}

/// Model store configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ModelsConfig {
    /// Root directory of the model store
    pub dir: PathBuf,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("models"),
        }
    }
}

/// External tool configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ExternalConfig {
    /// Command template for the external backend, with `{language}` and
    /// `{input}` placeholders
    pub command: Option<String>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
