//! Styles built from [crate::theme].
//!
//! - **[style]**: Map palette [Rgb](crate::theme::Rgb) to ratatui [Style](ratatui::style::Style) for card chrome, code and results.

mod style;

pub use style::{
    border_style, code_style, danger_style, label_style, result_style, rgb_to_color, success_style,
    text_muted_style, text_style,
};
