//! Tool card container: lays out a card's fragments.
//!
//! Cards never read anything back from the container; each render is one call
//! to [ToolCardContainer::compose].
//!
//! - **[base]**: [ToolCardBase], header line plus expandable input/result sections.
//! - **[view]**: [ToolCardView], a ratatui widget drawing those lines in a bordered block.

mod base;
mod view;

use browser_eval_core::ToolCallRecord;

use crate::fragment::CardFragments;

pub use base::{CardStatus, ToolCardBase};
pub use view::ToolCardView;

/// Everything a card passes to its container for one render.
#[derive(Debug, Clone)]
pub struct CardProps<'a> {
    pub tool_call: Option<&'a ToolCallRecord>,
    pub open: bool,
    pub fragments: CardFragments,
}

/// Owns card chrome and open/closed layout.
pub trait ToolCardContainer {
    type Output;

    fn compose(&self, props: CardProps<'_>) -> Self::Output;
}
