//! Tool card message rendering. Uses crate::theme for colors.
//!
//! - **browser_eval**: JavaScript evaluation card: expression summary, full input, result.

pub mod browser_eval;
