//! Map theme palette to ratatui styles for the card.
//!
//! All colors come from [CardPalette]; use these helpers so the summary,
//! the input chip and the result block stay consistent with the theme.

use ratatui::style::{Color, Modifier, Style};

use crate::theme::{CardPalette, Rgb};

/// Convert theme [Rgb] to ratatui [Color].
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

/// Style for card borders (border color, no fill).
pub fn border_style(border_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_rgb))
}

/// Style for primary text.
pub fn text_style(text_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_rgb))
}

/// Style for muted/secondary text.
pub fn text_muted_style(text_muted_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_muted_rgb))
}

/// Style for section labels ("Evaluate:", "Result").
pub fn label_style(palette: &CardPalette) -> Style {
    text_muted_style(palette.text_muted).add_modifier(Modifier::BOLD)
}

/// Inline code chip: the expression in summary and input views.
pub fn code_style(palette: &CardPalette) -> Style {
    Style::default()
        .fg(rgb_to_color(palette.code_foreground))
        .bg(rgb_to_color(palette.code_background))
}

/// Preformatted result block.
pub fn result_style(palette: &CardPalette) -> Style {
    Style::default()
        .fg(rgb_to_color(palette.result_foreground))
        .bg(rgb_to_color(palette.result_background))
}

/// Style for success state (tool done).
pub fn success_style(success_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(success_rgb))
}

/// Style for error/danger state (tool failed).
pub fn danger_style(danger_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(danger_rgb))
}
