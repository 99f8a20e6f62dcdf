//! Card palette: the semantic color roles a tool card uses.
//!
//! Surfaces and borders for the card chrome; text levels for labels and
//! summaries; a code surface for the expression; a result surface for the
//! preformatted tool output; semantic colors for the status icon.

use super::Appearance;
use super::rgb::Rgb;

#[derive(Clone, Debug, PartialEq)]
pub struct CardPalette {
    // --- Surfaces
    pub background: Rgb,
    pub border: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,

    // --- Code (expression chip)
    pub code_background: Rgb,
    pub code_foreground: Rgb,

    // --- Result block
    pub result_background: Rgb,
    pub result_foreground: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
}

impl CardPalette {
    pub fn dark() -> Self {
        Self {
            background: Rgb(8, 8, 12),
            border: Rgb(28, 30, 42),
            text: Rgb(200, 210, 245),
            text_muted: Rgb(70, 78, 110),
            code_background: Rgb(26, 27, 38),
            code_foreground: Rgb(200, 210, 245),
            result_background: Rgb(36, 40, 59),
            result_foreground: Rgb(230, 232, 240),
            accent: Rgb(99, 148, 255),
            danger: Rgb(255, 100, 120),
            success: Rgb(120, 220, 120),
        }
    }

    /// Light variant: gray-200 result block with black text.
    pub fn light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            border: Rgb(229, 229, 229),
            text: Rgb(55, 65, 81),
            text_muted: Rgb(86, 95, 137),
            code_background: Rgb(242, 242, 242),
            code_foreground: Rgb(26, 27, 38),
            result_background: Rgb(229, 231, 235),
            result_foreground: Rgb(0, 0, 0),
            accent: Rgb(122, 162, 247),
            danger: Rgb(247, 118, 142),
            success: Rgb(158, 206, 106),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }
}

impl Default for CardPalette {
    fn default() -> Self {
        Self::dark()
    }
}
