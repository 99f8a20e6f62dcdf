//! Draw composed card lines inside a bordered block.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::layouts::{border_style, rgb_to_color};
use crate::theme::CardPalette;

/// Lines from [super::ToolCardBase] in a rounded block. Lines are already
/// wrapped, so the paragraph does not wrap again.
pub struct ToolCardView<'a> {
    lines: Vec<Line<'static>>,
    palette: &'a CardPalette,
}

impl<'a> ToolCardView<'a> {
    pub fn new(lines: Vec<Line<'static>>, palette: &'a CardPalette) -> Self {
        Self { lines, palette }
    }

    /// Rows needed to draw every line plus the border.
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_add(2)).unwrap_or(u16::MAX)
    }

    /// Columns lost to the border; compose lines for `area width - this`.
    pub const BORDER_WIDTH: u16 = 2;
}

impl Widget for ToolCardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let surface = Style::default().bg(rgb_to_color(self.palette.background));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(self.palette.border))
            .style(surface);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines)
            .style(surface.fg(rgb_to_color(self.palette.text)))
            .render(inner, buf);
    }
}
