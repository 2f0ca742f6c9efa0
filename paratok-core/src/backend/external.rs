//! External-process tokenizer adapter
//!
//! Shells out to an external linguistic toolkit that writes the persisted
//! document format itself, performing its own paragraph and sentence
//! numbering. This is the one adapter that bypasses the document builder:
//! it works file to file, not line to line.

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::Result;

/// Default invocation, with a language-specific module path falling back
/// to the toolkit's generic preprocessing module
pub const DEFAULT_COMMAND_TEMPLATE: &str = "uplug -f pre/basic pre/{language}/basic -in {input}";

/// The external-process adapter
#[derive(Debug, Clone)]
pub struct ExternalTokenizer {
    template: String,
    language: String,
}

impl ExternalTokenizer {
    /// Create an adapter for a language with an optional command template
    ///
    /// The template may reference `{language}` and `{input}`.
    pub fn new(language: &str, template: Option<String>) -> Self {
        Self {
            template: template.unwrap_or_else(|| DEFAULT_COMMAND_TEMPLATE.to_string()),
            language: language.to_string(),
        }
    }

    /// Run the external tool, directing its stdout into the output file
    ///
    /// The tool's stderr is discarded and its exit status is not surfaced:
    /// a failed run manifests only as missing or empty output. Callers that
    /// need stronger guarantees must inspect the output file themselves.
    pub fn run(&self, input: &Path, output: &Path) -> Result<()> {
        let command = self
            .template
            .replace("{language}", &self.language)
            .replace("{input}", &shell_quote(input));
        log::debug!("running external tokenizer: {command}");

        let stdout = File::create(output)?;
        match Command::new("sh")
            .arg("-c")
            .arg(&command)
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) if !status.success() => {
                log::debug!("external tokenizer exited with {status}");
            }
            Err(e) => {
                log::debug!("external tokenizer could not be started: {e}");
            }
            Ok(_) => {}
        }
        Ok(())
    }
}

fn shell_quote(path: &Path) -> String {
    let raw = path.display().to_string();
    format!("'{}'", raw.replace('\'', r"'\''"))
}
