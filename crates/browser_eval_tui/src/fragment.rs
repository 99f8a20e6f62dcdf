//! Display fragments handed from a card to its container.
//!
//! A [Fragment] is a run of styled lines plus the rule for wrapping them. The
//! card builds fragments without knowing the terminal width and keeps their
//! text exactly as received; the container calls [Fragment::lines_for_width]
//! once it knows the width.

use ratatui::text::{Line, Span};

use crate::utils::{break_all_ranges, display_width, preformatted_ranges, terminal_text, TAB_WIDTH};

/// How a fragment wraps when a line is wider than the available columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Cut anywhere, character by character.
    #[default]
    BreakAll,
    /// Keep whitespace, break after whitespace when possible, cut long runs.
    Preformatted,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    pub lines: Vec<Line<'static>>,
    pub wrap: WrapMode,
}

impl Fragment {
    pub fn new(lines: Vec<Line<'static>>, wrap: WrapMode) -> Self {
        Self { lines, wrap }
    }

    /// Renders as nothing at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text content without styles; lines joined with `\n`. This is the text
    /// as built, tabs and carriage returns included.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Lines laid out for a terminal and wrapped to `width` columns according
    /// to [Self::wrap]. Tabs are expanded to [TAB_WIDTH] stops and control
    /// characters such as `\r` are dropped.
    pub fn lines_for_width(&self, width: usize) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .flat_map(|line| wrap_line(line, width, self.wrap))
            .collect()
    }
}

/// The three fragments every tool card produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardFragments {
    /// Collapsed one-line preview.
    pub summary: Fragment,
    /// Full tool input, shown when expanded.
    pub input: Fragment,
    /// Tool output, or [Fragment::empty] while there is none.
    pub result: Fragment,
}

pub(crate) fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// `line` as a terminal draws it. Tab stops are counted across span
/// boundaries.
fn layout_line(line: &Line<'static>) -> Line<'static> {
    let mut col = 0;
    let spans: Vec<Span<'static>> = line
        .spans
        .iter()
        .map(|span| {
            let text = terminal_text(&span.content, col, TAB_WIDTH);
            col += display_width(&text);
            Span::styled(text, span.style)
        })
        .collect();
    let mut out = Line::from(spans);
    out.style = line.style;
    out.alignment = line.alignment;
    out
}

/// Split one styled line into several, keeping each span's style on the
/// pieces that fall inside it.
fn wrap_line(line: &Line<'static>, width: usize, mode: WrapMode) -> Vec<Line<'static>> {
    let line = layout_line(line);
    let text = line_text(&line);
    let ranges = match mode {
        WrapMode::BreakAll => break_all_ranges(&text, width),
        WrapMode::Preformatted => preformatted_ranges(&text, width),
    };
    if ranges.len() <= 1 {
        return vec![line];
    }

    let mut bounds = Vec::with_capacity(line.spans.len());
    let mut offset = 0;
    for span in &line.spans {
        let end = offset + span.content.len();
        bounds.push((offset, end, span.style));
        offset = end;
    }

    ranges
        .into_iter()
        .map(|range| {
            let spans: Vec<Span<'static>> = bounds
                .iter()
                .filter_map(|&(start, end, style)| {
                    let lo = start.max(range.start);
                    let hi = end.min(range.end);
                    (lo < hi).then(|| Span::styled(text[lo..hi].to_string(), style))
                })
                .collect();
            let mut piece = Line::from(spans);
            piece.style = line.style;
            piece.alignment = line.alignment;
            piece
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ratatui::style::{Color, Style};

    use super::*;

    #[test]
    fn empty_fragment() {
        let fragment = Fragment::empty();
        assert!(fragment.is_empty());
        assert_eq!(fragment.plain_text(), "");
        assert!(fragment.lines_for_width(10).is_empty());
    }

    #[test]
    fn plain_text_joins_lines() {
        let fragment = Fragment::new(
            vec![
                Line::from(vec![Span::raw("a "), Span::raw("b")]),
                Line::from("c"),
            ],
            WrapMode::BreakAll,
        );
        assert_eq!(fragment.plain_text(), "a b\nc");
    }

    #[test]
    fn wrap_keeps_span_styles() {
        let red = Style::default().fg(Color::Red);
        let blue = Style::default().fg(Color::Blue);
        let fragment = Fragment::new(
            vec![Line::from(vec![
                Span::styled("abc", red),
                Span::styled("defg", blue),
            ])],
            WrapMode::BreakAll,
        );
        let lines = fragment.lines_for_width(2);
        let texts: Vec<String> = lines.iter().map(|l| line_text(l)).collect();
        assert_eq!(texts, vec!["ab", "cd", "ef", "g"]);
        assert_eq!(lines[1].spans.len(), 2);
        assert_eq!(lines[1].spans[0].style, red);
        assert_eq!(lines[1].spans[1].style, blue);
    }

    #[test]
    fn short_lines_untouched() {
        let line = Line::from("short");
        let fragment = Fragment::new(vec![line.clone()], WrapMode::Preformatted);
        assert_eq!(fragment.lines_for_width(80), vec![line]);
    }

    #[test]
    fn preformatted_wrap_keeps_all_text() {
        let fragment = Fragment::new(vec![Line::from("one two   three")], WrapMode::Preformatted);
        let lines = fragment.lines_for_width(6);
        let joined: String = lines.iter().map(|l| line_text(l)).collect();
        assert_eq!(joined, "one two   three");
        assert!(lines.len() > 1);
    }

    #[test]
    fn layout_expands_tabs_and_drops_carriage_returns() {
        let fragment = Fragment::new(
            vec![Line::from(vec![Span::raw("ab"), Span::raw("\tc\r")])],
            WrapMode::Preformatted,
        );
        let lines = fragment.lines_for_width(80);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "ab      c");
        assert_eq!(fragment.plain_text(), "ab\tc\r");
    }
}
