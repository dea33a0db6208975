use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "guideline-guard")]
#[command(author, version, about = "Check a frontend codebase against team guidelines")]
#[command(long_about = "Scans a frontend project for React, styling, accessibility, \
    code style, performance, security, state management, testing, translation and \
    TypeScript guideline violations.\n\n\
    Exit codes:\n  \
    0 - No failed guidelines\n  \
    1 - Failed guidelines found (or warnings with --strict)\n  \
    2 - Configuration or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Project root to analyze
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file (defaults to .guideline-guard.toml in the root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum line length (overrides config and cursor rules)
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Extra ignore patterns (gitignore-style, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Run only these rule groups (comma-separated, e.g. react,typescript)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Output format [possible values: text, json, html]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write an HTML report to this file
    #[arg(long)]
    pub html_report: Option<PathBuf>,

    /// Only warn, never fail on violated guidelines
    #[arg(long)]
    pub warn_only: bool,

    /// Treat warnings as failures (exit code 1)
    #[arg(long, conflicts_with = "warn_only")]
    pub strict: bool,

    /// Increase output verbosity (-v lists passed guidelines)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
