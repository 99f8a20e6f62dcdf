//! `render`: draw the card for one record.
//!
//! On a terminal the card is drawn inline with ratatui; when stdout is piped
//! the composed lines are printed as plain text.

use std::path::Path;

use anyhow::Result;
use browser_eval_core::TracingDiagnostics;
use browser_eval_tui::{
    present, Appearance, BrowserEvalCard, CardPalette, ToolCardBase, ToolCardView,
};
use console::Term;
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    text::Line,
    Terminal, TerminalOptions, Viewport,
};
use serde_json::json;

use crate::commands::load_record;
use crate::output;

/// Narrowest card drawn, border included.
const MIN_WIDTH: u16 = 20;

pub fn handle(path: Option<&Path>, open: bool, width: Option<u16>, light: bool) -> Result<()> {
    let record = load_record(path)?;
    let palette = CardPalette::for_appearance(Appearance::from_light_flag(light));
    let card = BrowserEvalCard::new(Some(&record), open);

    if output::is_json() {
        let state = card.display_state(&TracingDiagnostics);
        let fragments = present(&state.expression, state.result(), &palette);
        output::data(
            "card",
            &json!({
                "open": open,
                "state": state,
                "summary": fragments.summary.plain_text(),
                "input": fragments.input.plain_text(),
                "result": (!fragments.result.is_empty()).then(|| fragments.result.plain_text()),
            }),
        );
        return Ok(());
    }

    let stdout = Term::stdout();
    let columns = width.unwrap_or_else(|| stdout.size().1).max(MIN_WIDTH);
    let inner = usize::from(columns.saturating_sub(ToolCardView::BORDER_WIDTH));
    let base = ToolCardBase::new(palette.clone(), inner);
    let lines = card.render(&base, &palette, &TracingDiagnostics);

    if stdout.is_term() {
        draw_inline(lines, &palette, columns)
    } else {
        output::plain_lines(&lines);
        Ok(())
    }
}

fn draw_inline(lines: Vec<Line<'static>>, palette: &CardPalette, columns: u16) -> Result<()> {
    let view = ToolCardView::new(lines, palette);
    let height = view.height();
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )?;
    terminal.draw(|frame| {
        let full = frame.area();
        let area = Rect {
            width: columns.min(full.width),
            ..full
        };
        frame.render_widget(view, area);
    })?;
    println!();
    Ok(())
}
