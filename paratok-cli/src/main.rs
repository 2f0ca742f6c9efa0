//! paratok command-line entry point

use clap::Parser;
use paratok_cli::commands::Commands;

/// Sentence and word segmentation for corpus preprocessing
#[derive(Debug, Parser)]
#[command(name = "paratok", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
