//! browser_eval card: show the JavaScript expression a tool call evaluated
//! and what it returned.
//!
//! Two steps, both pure:
//! 1. [extract] pulls `expression` out of the record's JSON input. Malformed
//!    input goes to the [DiagnosticSink] and yields empty text; it never fails.
//! 2. [present] turns the expression and the optional result into the summary,
//!    input and result [Fragment]s.
//!
//! [BrowserEvalCard] runs both and hands the fragments to a [ToolCardContainer].

use browser_eval_core::{BROWSER_EVAL_TOOL, DiagnosticSink, ExpressionPayload, ToolCallRecord};
use browser_eval_observability::render_span;
use ratatui::text::{Line, Span};
use serde::Serialize;

use crate::card::{CardProps, ToolCardContainer};
use crate::fragment::{CardFragments, Fragment, WrapMode};
use crate::layouts::{code_style, label_style, result_style, text_muted_style};
use crate::theme::CardPalette;
use crate::utils::{
    inline_text, split_lines, truncate_chars, INPUT_LABEL, SUMMARY_GLYPH, SUMMARY_MAX_CHARS,
    TRUNCATION_MARKER,
};

/// What the card shows, derived fresh from the record on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub expression: String,
    pub has_result: bool,
    pub result_text: String,
}

impl DisplayState {
    pub fn derive(tool_call: Option<&ToolCallRecord>, diagnostics: &dyn DiagnosticSink) -> Self {
        let expression = extract_expression(tool_call, diagnostics);
        let result = tool_call.and_then(ToolCallRecord::result_text);
        Self {
            expression,
            has_result: result.is_some(),
            result_text: result.unwrap_or_default().to_string(),
        }
    }

    /// `None` when there is no result to show.
    pub fn result(&self) -> Option<&str> {
        self.has_result.then_some(self.result_text.as_str())
    }
}

/// Expression from raw tool input. Absent or empty input gives empty text
/// without a diagnostic; undecodable input gives empty text and one diagnostic.
pub fn extract(raw_input: Option<&str>, diagnostics: &dyn DiagnosticSink) -> String {
    extract_input(raw_input, None, diagnostics)
}

/// [extract] on a record's input, tagging diagnostics with the tool call id.
pub fn extract_expression(tool_call: Option<&ToolCallRecord>, diagnostics: &dyn DiagnosticSink) -> String {
    match tool_call {
        Some(record) => extract_input(
            record.input.as_deref(),
            record.tool_call_id.as_deref(),
            diagnostics,
        ),
        None => String::new(),
    }
}

fn extract_input(
    raw_input: Option<&str>,
    tool_call_id: Option<&str>,
    diagnostics: &dyn DiagnosticSink,
) -> String {
    let raw = match raw_input {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };
    match ExpressionPayload::decode(raw) {
        Ok(payload) => payload.into_expression(),
        Err(err) => {
            diagnostics.malformed_input(tool_call_id, &err);
            String::new()
        }
    }
}

/// Collapsed preview: the expression itself up to [SUMMARY_MAX_CHARS]
/// characters, otherwise its first [SUMMARY_MAX_CHARS] characters and "...".
pub fn summary_text(expression: &str) -> String {
    truncate_chars(expression, SUMMARY_MAX_CHARS, TRUNCATION_MARKER)
}

/// Build the three fragments. The summary is one line and may be cut; the
/// input view carries the whole expression verbatim; the result is empty
/// unless `result_text` is non-empty.
pub fn present(expression: &str, result_text: Option<&str>, palette: &CardPalette) -> CardFragments {
    CardFragments {
        summary: summary_fragment(expression, palette),
        input: input_fragment(expression, palette),
        result: result_text
            .filter(|r| !r.is_empty())
            .map(|r| result_fragment(r, palette))
            .unwrap_or_else(Fragment::empty),
    }
}

fn summary_fragment(expression: &str, palette: &CardPalette) -> Fragment {
    let line = Line::from(vec![
        Span::styled(SUMMARY_GLYPH, text_muted_style(palette.text_muted)),
        Span::raw(" "),
        Span::styled(inline_text(&summary_text(expression)), code_style(palette)),
    ]);
    Fragment::new(vec![line], WrapMode::BreakAll)
}

fn input_fragment(expression: &str, palette: &CardPalette) -> Fragment {
    let lead = vec![
        Span::styled(INPUT_LABEL, label_style(palette)),
        Span::raw(" "),
    ];
    Fragment::new(labelled_code_lines(lead, expression, palette), WrapMode::BreakAll)
}

/// `lead` followed by the first line of `code`; remaining lines of `code` on
/// their own. Line text is kept as is, `\r` included.
fn labelled_code_lines(
    lead: Vec<Span<'static>>,
    code: &str,
    palette: &CardPalette,
) -> Vec<Line<'static>> {
    let style = code_style(palette);
    let mut parts = split_lines(code).into_iter();
    let mut first = lead;
    if let Some(head) = parts.next().filter(|h| !h.is_empty()) {
        first.push(Span::styled(head.to_string(), style));
    }
    let mut lines = vec![Line::from(first)];
    lines.extend(parts.map(|l| Line::from(Span::styled(l.to_string(), style))));
    lines
}

fn result_fragment(result: &str, palette: &CardPalette) -> Fragment {
    let style = result_style(palette);
    let lines = split_lines(result)
        .into_iter()
        .map(|l| Line::from(Span::styled(l.to_string(), style)).style(style))
        .collect();
    Fragment::new(lines, WrapMode::Preformatted)
}

/// Card props: the record supplied by the host and whether the card is expanded.
/// Borrowed for one render; nothing is kept between renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEvalCard<'a> {
    pub tool_call: Option<&'a ToolCallRecord>,
    pub open: bool,
}

impl<'a> BrowserEvalCard<'a> {
    pub fn new(tool_call: Option<&'a ToolCallRecord>, open: bool) -> Self {
        Self { tool_call, open }
    }

    pub fn display_state(&self, diagnostics: &dyn DiagnosticSink) -> DisplayState {
        DisplayState::derive(self.tool_call, diagnostics)
    }

    pub fn fragments(&self, palette: &CardPalette, diagnostics: &dyn DiagnosticSink) -> CardFragments {
        let state = self.display_state(diagnostics);
        present(&state.expression, state.result(), palette)
    }

    /// Build the fragments and hand them, with the record and `open`, to `container`.
    pub fn render<C: ToolCardContainer>(
        &self,
        container: &C,
        palette: &CardPalette,
        diagnostics: &dyn DiagnosticSink,
    ) -> C::Output {
        let tool_call_id = self.tool_call.and_then(|t| t.tool_call_id.as_deref());
        let span = render_span!(BROWSER_EVAL_TOOL, tool_call_id);
        let _guard = span.enter();
        span.record("card.open", self.open);

        let fragments = self.fragments(palette, diagnostics);
        tracing::trace!(
            has_result = !fragments.result.is_empty(),
            summary_lines = fragments.summary.lines.len(),
            "browser_eval card fragments built"
        );
        container.compose(CardProps {
            tool_call: self.tool_call,
            open: self.open,
            fragments,
        })
    }
}

#[cfg(test)]
mod tests {
    use browser_eval_core::CollectingDiagnostics;

    use super::*;

    fn record(input: &str) -> ToolCallRecord {
        ToolCallRecord::new(BROWSER_EVAL_TOOL).with_id("t1").with_input(input)
    }

    #[test]
    fn extract_returns_expression() {
        let diag = CollectingDiagnostics::new();
        assert_eq!(extract(Some(r#"{"expression":"document.title"}"#), &diag), "document.title");
        assert!(diag.is_empty());
    }

    #[test]
    fn extract_absent_and_empty_are_silent() {
        let diag = CollectingDiagnostics::new();
        assert_eq!(extract(None, &diag), "");
        assert_eq!(extract(Some(""), &diag), "");
        assert_eq!(extract_expression(None, &diag), "");
        assert!(diag.is_empty());
    }

    #[test]
    fn extract_missing_field_is_silent() {
        let diag = CollectingDiagnostics::new();
        assert_eq!(extract(Some(r#"{"script":"1"}"#), &diag), "");
        assert_eq!(extract(Some(r#"{"expression":7}"#), &diag), "");
        assert!(diag.is_empty());
    }

    #[test]
    fn extract_malformed_reports_once() {
        let diag = CollectingDiagnostics::new();
        let rec = record("not json");
        assert_eq!(extract_expression(Some(&rec), &diag), "");
        let entries = diag.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tool_call_id.as_deref(), Some("t1"));
    }

    #[test]
    fn extract_keeps_quotes_newlines_unicode() {
        let diag = CollectingDiagnostics::new();
        let expr = "document.querySelector(\"h1\")\n  .textContent // 日本語 🚀";
        let raw = serde_json::json!({ "expression": expr }).to_string();
        assert_eq!(extract(Some(&raw), &diag), expr);
    }

    #[test]
    fn summary_is_verbatim_up_to_limit() {
        for len in [0, 1, 49, 50] {
            let s = "y".repeat(len);
            assert_eq!(summary_text(&s), s);
        }
    }

    #[test]
    fn summary_truncates_over_limit() {
        for len in [51, 60, 500] {
            let s = "z".repeat(len);
            let out = summary_text(&s);
            assert_eq!(out, format!("{}...", "z".repeat(50)));
            assert_eq!(out.chars().count(), 53);
        }
    }

    #[test]
    fn summary_fragment_has_glyph_and_text() {
        let palette = CardPalette::dark();
        let fragments = present("document.title", None, &palette);
        assert_eq!(fragments.summary.plain_text(), "📱 document.title");
        assert_eq!(fragments.summary.wrap, WrapMode::BreakAll);
        let spans = &fragments.summary.lines[0].spans;
        assert_eq!(spans.last().map(|s| s.style), Some(code_style(&palette)));
    }

    #[test]
    fn input_view_is_never_truncated() {
        let palette = CardPalette::dark();
        let long = "a".repeat(300);
        let fragments = present(&long, None, &palette);
        assert_eq!(fragments.input.plain_text(), format!("Evaluate: {long}"));
        assert!(fragments.summary.plain_text().ends_with("..."));
    }

    #[test]
    fn multiline_expression_keeps_lines_in_input() {
        let palette = CardPalette::dark();
        let fragments = present("let a = 1;\na + 1", None, &palette);
        assert_eq!(fragments.input.lines.len(), 2);
        assert_eq!(fragments.input.plain_text(), "Evaluate: let a = 1;\na + 1");
    }

    #[test]
    fn summary_of_multiline_expression_is_one_line() {
        let palette = CardPalette::dark();
        let fragments = present("const a = 1;\r\nconst b = 2;\na + b", None, &palette);
        assert_eq!(fragments.summary.lines.len(), 1);
        assert_eq!(fragments.summary.plain_text(), "📱 const a = 1;  const b = 2; a + b");
    }

    #[test]
    fn long_multiline_summary_is_cut_before_joining() {
        let palette = CardPalette::dark();
        let expression = format!("{}\n{}", "a".repeat(30), "b".repeat(30));
        let fragments = present(&expression, None, &palette);
        let expected = format!("📱 {} {}...", "a".repeat(30), "b".repeat(19));
        assert_eq!(fragments.summary.plain_text(), expected);
    }

    #[test]
    fn input_view_keeps_carriage_returns() {
        let palette = CardPalette::dark();
        let fragments = present("a\r\nb", None, &palette);
        assert_eq!(fragments.input.plain_text(), "Evaluate: a\r\nb");
    }

    #[test]
    fn result_text_is_kept_as_received() {
        let palette = CardPalette::dark();
        let result = "name\tvalue\r\ntitle\tExample  \r\n";
        let fragments = present("x", Some(result), &palette);
        assert_eq!(fragments.result.plain_text(), result);
    }

    #[test]
    fn empty_expression_still_renders_labels() {
        let palette = CardPalette::dark();
        let fragments = present("", None, &palette);
        assert_eq!(fragments.summary.plain_text(), "📱 ");
        assert_eq!(fragments.input.plain_text(), "Evaluate: ");
    }

    #[test]
    fn result_absent_or_empty_is_empty_fragment() {
        let palette = CardPalette::dark();
        assert!(present("1+1", None, &palette).result.is_empty());
        assert!(present("1+1", Some(""), &palette).result.is_empty());
    }

    #[test]
    fn result_is_preformatted() {
        let palette = CardPalette::dark();
        let fragments = present("x", Some("{\n  \"a\": 1\n}"), &palette);
        assert_eq!(fragments.result.wrap, WrapMode::Preformatted);
        assert_eq!(fragments.result.lines.len(), 3);
        assert_eq!(fragments.result.plain_text(), "{\n  \"a\": 1\n}");
        assert_eq!(fragments.result.lines[0].style, result_style(&palette));
    }

    #[test]
    fn display_state_from_record() {
        let diag = CollectingDiagnostics::new();
        let rec = record(r#"{"expression":"1+1"}"#).with_result("2");
        let state = DisplayState::derive(Some(&rec), &diag);
        assert_eq!(
            state,
            DisplayState {
                expression: "1+1".into(),
                has_result: true,
                result_text: "2".into(),
            }
        );
        assert_eq!(state.result(), Some("2"));
    }

    #[test]
    fn display_state_without_record() {
        let diag = CollectingDiagnostics::new();
        let state = DisplayState::derive(None, &diag);
        assert_eq!(state, DisplayState::default());
        assert_eq!(state.result(), None);
    }

    #[test]
    fn render_is_idempotent() {
        struct Passthrough;
        impl ToolCardContainer for Passthrough {
            type Output = (bool, CardFragments);
            fn compose(&self, props: CardProps<'_>) -> Self::Output {
                (props.open, props.fragments)
            }
        }

        let diag = CollectingDiagnostics::new();
        let palette = CardPalette::dark();
        let rec = record(r#"{"expression":"window.location.href"}"#).with_result("https://example.com/");
        let card = BrowserEvalCard::new(Some(&rec), true);
        let first = card.render(&Passthrough, &palette, &diag);
        let second = card.render(&Passthrough, &palette, &diag);
        assert_eq!(first, second);
        assert!(first.0);
        assert_eq!(first.1.result.plain_text(), "https://example.com/");
    }
}
