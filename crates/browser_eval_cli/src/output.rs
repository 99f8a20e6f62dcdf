//! Terminal output helpers. Dual-mode: styled text for humans, structured JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for the display-state table

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;
use ratatui::text::Line;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn envelope(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    let msg = Msg {
        level,
        message,
        data,
    };
    serde_json::to_string(&msg).unwrap_or_else(|_| {
        format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}")
    })
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", envelope("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

/// Emit an arbitrary serializable value as structured output.
pub fn data<T: Serialize>(label: &str, value: &T) {
    if is_json() {
        let json_val = serde_json::to_value(value).unwrap_or(JsonValue::Null);
        println!("{}", envelope("data", label, Some(&json_val)));
    } else {
        let formatted =
            serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{label}: <?>"));
        println!("{formatted}");
    }
}

/// Print composed card lines without styles (stdout is not a terminal).
pub fn plain_lines(lines: &[Line<'_>]) {
    for line in lines {
        println!("{}", plain_line(line));
    }
}

/// Span text of one line, whitespace included.
fn plain_line(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

// ── Tables ─────────────────────────────────────────────────────────

/// Create a styled two-column table.
pub fn table(col1: &str, col2: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(col1)
                .fg(Color::Cyan)
                .add_attribute(comfy_table::Attribute::Bold),
            Cell::new(col2)
                .fg(Color::Cyan)
                .add_attribute(comfy_table::Attribute::Bold),
        ]);
    table
}

/// Add a row to the table.
pub fn table_row(table: &mut Table, name: &str, value: &str) {
    table.add_row(vec![Cell::new(name).fg(Color::Green), Cell::new(value)]);
}
