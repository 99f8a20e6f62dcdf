//! Card theme: semantic color palette for the browser_eval card.
//!
//! # Example
//!
//! ```
//! use browser_eval_tui::theme::{Appearance, CardPalette};
//!
//! let palette = CardPalette::dark();
//! let (r, g, b) = palette.text.tuple();
//! assert!(r > 0 && g > 0 && b > 0);
//!
//! let light = CardPalette::for_appearance(Appearance::Light);
//! assert_ne!(light, palette);
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::CardPalette;
pub use rgb::Rgb;
