use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Slow Query Detector - scan SQL text for slow-query anti-patterns
#[derive(Parser, Debug)]
#[command(name = "slow-query-detector")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report every anti-pattern occurrence with source locations
    Check {
        /// SQL files to check (use - for stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Override the content type inferred from file extensions
        #[arg(short, long)]
        language: Option<String>,

        /// Output format
        #[arg(short = 'f', long, value_enum)]
        output_format: Option<Format>,

        /// Show the matched text alongside each finding
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Aggregate one-message-per-rule summary of a single document
    Summary {
        /// SQL file to summarize (use - for stdin); omit to reproduce
        /// the "no active document" outcome
        file: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// List the built-in rule catalog
    Rules {
        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
