//! CLI command definitions

use clap::{Parser, ValueEnum};
use muse_domain::ResolutionTier;
use std::path::PathBuf;

/// Output format for theory visualizations
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted console output
    Text,
    /// Raw visualization JSON
    Json,
}

/// CLI arguments for muse-ai
#[derive(Parser, Debug)]
#[command(name = "muse-ai")]
#[command(author, version, about = "Music theory companion backed by a generative oracle")]
#[command(long_about = r#"
Muse AI answers music theory questions with structured visualizations,
tutors you in an interactive chat, and generates cover artwork.

Modes:
  Default         Visualize a theory request ("C major scale", "Dm7 chord")
  --chat          Interactive tutor chat
  --image PROMPT  Generate artwork from a prompt

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./muse.toml         Project-level config
3. ~/.config/muse-ai/config.toml   Global config

Example:
  muse-ai "C harmonic minor scale on guitar"
  muse-ai --chat
  muse-ai --image "an upright bass under stage lights" --resolution high
"#)]
pub struct Cli {
    /// The theory request to visualize (not required in chat or image mode)
    pub request: Option<String>,

    /// Start interactive tutor chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Generate artwork from the given prompt
    #[arg(short, long, value_name = "PROMPT")]
    pub image: Option<String>,

    /// Resolution tier for generated artwork (low, medium, high)
    #[arg(short, long, value_name = "TIER")]
    pub resolution: Option<ResolutionTier>,

    /// Write generated artwork to this path instead of a timestamped name
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Override the model used by the active mode
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format for theory visualizations
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
