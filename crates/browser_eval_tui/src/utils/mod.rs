//! Shared utilities for the card.
//!
//! - **[constants]**: Summary limits, glyphs, labels and padding.
//! - **[format]**: Character truncation, line splitting, terminal layout text and the two wrapping modes.

mod constants;
mod format;

pub use constants::*;
pub use format::{
    break_all_ranges, display_width, inline_text, preformatted_ranges, split_lines, terminal_text,
    truncate_chars,
};
