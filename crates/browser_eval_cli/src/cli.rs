//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Preview the browser_eval tool card for a tool-call record
#[derive(Parser)]
#[command(name = "browser-eval-card", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Card drawn for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the card for a tool-call record (JSON file, or stdin when omitted or "-")
    Render {
        /// Path to the tool-call record
        path: Option<PathBuf>,
        /// Show the expanded card (input and result)
        #[arg(long)]
        open: bool,
        /// Card width in columns (default: terminal width)
        #[arg(long)]
        width: Option<u16>,
        /// Use the light palette
        #[arg(long)]
        light: bool,
    },
    /// Show the derived display state of a tool-call record
    Inspect {
        /// Path to the tool-call record
        path: Option<PathBuf>,
    },
}
