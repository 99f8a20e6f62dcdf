//! browser-eval-tui: the browser_eval tool card for the terminal UI.
//!
//! Theming in `theme`; styles in `layouts`; text helpers in `utils`.
//! The card itself is [messages::browser_eval]: it extracts the expression from a
//! [browser_eval_core::ToolCallRecord] and builds the three [fragment::Fragment]s that a
//! [card::ToolCardContainer] lays out.

pub mod card;
pub mod fragment;
pub mod layouts;
pub mod messages;
pub mod theme;
pub mod utils;

pub use card::{CardProps, ToolCardBase, ToolCardContainer, ToolCardView};
pub use fragment::{CardFragments, Fragment, WrapMode};
pub use messages::browser_eval::{
    extract, extract_expression, present, summary_text, BrowserEvalCard, DisplayState,
};
pub use theme::{Appearance, CardPalette};
