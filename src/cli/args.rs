//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// meetnotes - Structured meeting notes from raw transcripts
#[derive(Parser, Debug)]
#[command(name = "meetnotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more transcripts (reads stdin when no files given)
    Analyze(AnalyzeArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Transcript files to analyze
    pub files: Vec<PathBuf>,

    /// Force heuristic pattern-matching analysis (no API call)
    #[arg(long)]
    pub demo: bool,

    /// Override the retry budget for transient API failures
    #[arg(long)]
    pub retries: Option<u32>,

    /// Save each analysis as a Markdown file
    #[arg(short, long)]
    pub save: bool,

    /// Directory for saved notes (defaults to general.notes_dir)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print results as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
