//! Reference tool card container.
//!
//! Collapsed: one header line `▸ ✓ browser_eval  <summary>`.
//! Expanded: the header, then the input fragment and (if any) the result
//! fragment, each indented by [LEFT_PADDING].

use browser_eval_core::{BROWSER_EVAL_TOOL, ToolCallRecord};
use ratatui::text::{Line, Span};

use crate::card::{CardProps, ToolCardContainer};
use crate::fragment::Fragment;
use crate::layouts::{danger_style, success_style, text_muted_style, text_style};
use crate::theme::CardPalette;
use crate::utils::{display_width, LEFT_PADDING};

/// Tool call state shown by the header icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Running,
    Done,
    Failed,
}

impl CardStatus {
    pub fn of(tool_call: Option<&ToolCallRecord>) -> Self {
        match tool_call {
            Some(t) if t.is_error() => CardStatus::Failed,
            Some(t) if t.is_finished() => CardStatus::Done,
            _ => CardStatus::Running,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CardStatus::Running => "▶ ",
            CardStatus::Done => "✓ ",
            CardStatus::Failed => "✗ ",
        }
    }
}

/// Lays a card out as lines for a fixed number of columns.
#[derive(Debug, Clone)]
pub struct ToolCardBase {
    pub palette: CardPalette,
    pub width: usize,
}

impl ToolCardBase {
    pub fn new(palette: CardPalette, width: usize) -> Self {
        Self { palette, width }
    }

    fn header(&self, tool_call: Option<&ToolCallRecord>, open: bool, summary: &Fragment) -> Fragment {
        let status = CardStatus::of(tool_call);
        let icon_style = match status {
            CardStatus::Running => text_style(self.palette.accent),
            CardStatus::Done => success_style(self.palette.success),
            CardStatus::Failed => danger_style(self.palette.danger),
        };
        let name = tool_call
            .map(|t| t.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(BROWSER_EVAL_TOOL);

        let mut first = vec![
            Span::styled(if open { "▾ " } else { "▸ " }, text_muted_style(self.palette.text_muted)),
            Span::styled(status.icon(), icon_style),
            Span::styled(name.to_string(), text_muted_style(self.palette.text_muted)),
            Span::raw("  "),
        ];
        let mut rest = summary.lines.iter().cloned();
        if let Some(line) = rest.next() {
            first.extend(line.spans);
        }
        let mut lines = vec![Line::from(first)];
        lines.extend(rest);
        Fragment::new(lines, summary.wrap)
    }

    fn section(&self, fragment: &Fragment) -> Vec<Line<'static>> {
        let inner = self.width.saturating_sub(display_width(LEFT_PADDING));
        fragment
            .lines_for_width(inner)
            .into_iter()
            .map(|line| {
                let style = line.style;
                let mut spans = vec![Span::raw(LEFT_PADDING)];
                spans.extend(line.spans);
                Line::from(spans).style(style)
            })
            .collect()
    }
}

impl ToolCardContainer for ToolCardBase {
    type Output = Vec<Line<'static>>;

    fn compose(&self, props: CardProps<'_>) -> Self::Output {
        let fragments = props.fragments;
        let mut lines = self
            .header(props.tool_call, props.open, &fragments.summary)
            .lines_for_width(self.width);
        if props.open {
            lines.extend(self.section(&fragments.input));
            if !fragments.result.is_empty() {
                lines.extend(self.section(&fragments.result));
            }
        }
        lines
    }
}
