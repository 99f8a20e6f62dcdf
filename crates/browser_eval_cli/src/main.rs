//! CLI entry point for the browser_eval card preview.

mod cli;
mod commands;
mod output;

use browser_eval_observability::ObservabilityConfig;
use clap::Parser;

use crate::cli::Cli;

/// Load configuration from env files: `~/.browser-eval/env`, then the nearest
/// project `.env`. Values already in the environment win over both.
fn load_config() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(".browser-eval").join("env");
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        for _ in 0..32 {
            let env_file = dir.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
}

fn main() {
    load_config();
    let cli = Cli::parse();
    output::init(cli.output);

    let mut config = ObservabilityConfig::from_env();
    if cli.verbose {
        config = config.with_log_level("debug");
    }
    if let Err(e) = browser_eval_observability::init(config) {
        output::error(&e.to_string());
    }

    if let Err(e) = commands::handle(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
