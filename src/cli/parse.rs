//! CLI parse: clap types for Clipsmith. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Clipsmith CLI - Text-to-video generation client
#[derive(Parser)]
#[command(name = "clipsmith")]
#[command(about = "Turn text into narrated video via a remote generation service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (searched for config/config.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Generation service base URL (overrides configuration)
    #[arg(long)]
    pub service_url: Option<String>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a narrated video from text
    Generate {
        /// Text to narrate (prompted interactively when omitted)
        text: Option<String>,

        /// Dialect code (msa, egyptian, gulf, levantine, maghrebi)
        #[arg(long)]
        dialect: Option<String>,

        /// Voice id (male1, female1, male2, female2)
        #[arg(long)]
        voice: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Fail on missing inputs instead of prompting
        #[arg(long)]
        non_interactive: bool,
    },
    /// List supported dialects
    Dialects {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List available voices
    Voices {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List projects recorded on the generation service
    Projects {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the status of a video generation job
    Status {
        /// Job id returned by the video generation step
        job_id: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Write to the workspace config/ directory instead of the global path
        #[arg(long)]
        workspace: bool,
    },
    /// Show the effective configuration
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
