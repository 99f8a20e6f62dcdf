//! Command dispatch.

pub mod inspect;
pub mod render;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use browser_eval_core::ToolCallRecord;

use crate::cli::{Cli, Command};

pub fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render {
            path,
            open,
            width,
            light,
        } => render::handle(path.as_deref(), open, width, light),
        Command::Inspect { path } => inspect::handle(path.as_deref()),
    }
}

/// Read a record from `path`, or from stdin when `path` is absent or "-".
pub fn load_record(path: Option<&Path>) -> Result<ToolCallRecord> {
    let record = match path.filter(|p| *p != Path::new("-")) {
        Some(path) => ToolCallRecord::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            ToolCallRecord::from_json(&buf)?
        }
    };
    tracing::debug!(
        tool = %record.name,
        tool_call_id = record.tool_call_id.as_deref().unwrap_or("-"),
        finished = record.is_finished(),
        "Loaded tool-call record"
    );
    Ok(record)
}
