//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// recap - Turn long transcripts into markdown summaries
#[derive(Parser, Debug)]
#[command(name = "recap")]
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
    /// Summarize a transcript file into markdown
    Summarize {
        /// Transcript text file
        file: PathBuf,

        /// Model to use (defaults to llm.model)
        #[arg(short, long)]
        model: Option<String>,

        /// Output file (defaults to summarize.output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a short title for a transcript file
    Title {
        /// Transcript text file
        file: PathBuf,

        /// Number of leading characters sent to the model
        #[arg(long)]
        head: Option<usize>,
    },

    /// Show how a transcript would be split, without calling the model
    Plan {
        /// Transcript text file
        file: PathBuf,

        /// Model whose context window is used (defaults to llm.model)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// List known models and their context window sizes
    Models,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
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
