//! `inspect`: print the derived display state.

use std::path::Path;

use anyhow::Result;
use browser_eval_core::TracingDiagnostics;
use browser_eval_tui::{summary_text, DisplayState};

use crate::commands::load_record;
use crate::output;

pub fn handle(path: Option<&Path>) -> Result<()> {
    let record = load_record(path)?;
    let state = DisplayState::derive(Some(&record), &TracingDiagnostics);

    if output::is_json() {
        output::data("display_state", &state);
        return Ok(());
    }

    let mut table = output::table("field", "value");
    output::table_row(&mut table, "tool", &record.name);
    output::table_row(
        &mut table,
        "tool_call_id",
        record.tool_call_id.as_deref().unwrap_or("-"),
    );
    output::table_row(&mut table, "expression", &state.expression);
    output::table_row(&mut table, "summary", &summary_text(&state.expression));
    output::table_row(&mut table, "has_result", &state.has_result.to_string());
    output::table_row(&mut table, "result", &state.result_text);
    println!("{table}");
    Ok(())
}
