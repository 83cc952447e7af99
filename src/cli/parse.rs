//! CLI parse: clap types for editorskit-features. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// EditorsKit feature catalog tool
#[derive(Parser, Debug)]
#[command(name = "editorskit-features")]
#[command(about = "Inspect and assemble the EditorsKit block editor feature catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides the user config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Translation table (JSON: { domain: { source: translation } })
    #[arg(long)]
    pub labels: Option<PathBuf>,

    /// Disable logging
    #[arg(long, short)]
    pub quiet: bool,

    /// Debug-level logging
    #[arg(long, short)]
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

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the built-in feature catalog
    Catalog {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Run one settings-assembly pass and print the resulting settings
    Assemble {
        /// Settings JSON object to start from (default: {})
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Post ID of the editing context
        #[arg(long)]
        post_id: Option<u64>,
        /// Post type of the editing context
        #[arg(long)]
        post_type: Option<String>,
    },
    /// Report whether a feature is enabled after assembly
    Check {
        /// Category key (e.g. writing)
        category: String,
        /// Feature key (e.g. markdown)
        feature: String,
        /// Settings JSON object to start from (default: {})
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Print the effective configuration as TOML
    Config,
}
