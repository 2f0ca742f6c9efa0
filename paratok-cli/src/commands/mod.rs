//! CLI command implementations

use clap::Subcommand;
use paratok_core::{language, TokenizerKind};

use crate::error::CliResult;

pub mod tokenize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text files into paragraph/sentence/word documents
    Tokenize(tokenize::TokenizeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List language support per tokenizer backend
    Languages,

    /// List the available tokenizer backends
    Tokenizers,
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("rules:        {}", language::ruleset_languages().join(", "));
                println!(
                    "statistical:  {}",
                    language::statistical_languages().join(", ")
                );
                println!("neural:       any language with a fetched model package");
                println!("external:     any language known to the external tool");
                println!("passthrough:  not applicable");
            }
            ListCommands::Tokenizers => {
                for kind in TokenizerKind::ALL {
                    let description = match kind {
                        TokenizerKind::External => {
                            "external toolkit subprocess, writes the output itself"
                        }
                        TokenizerKind::Rules => "rule-based sentence and word splitting",
                        TokenizerKind::Statistical => "statistical pipeline with tags and lemmas",
                        TokenizerKind::Neural => "neural pipeline with tags and lemmas",
                        TokenizerKind::Passthrough => "no tokenization, defer to a later stage",
                    };
                    println!("{:<13} {description}", kind.as_str());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };
        let debug_str = format!("{list_cmd:?}");
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }

    #[test]
    fn test_list_commands_execute_does_not_panic() {
        ListCommands::Languages.execute();
        ListCommands::Tokenizers.execute();
    }
}
