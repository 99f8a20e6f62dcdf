//! Theme appearance: light or dark terminal background.

/// Whether the theme is light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Dark,
    Light,
}

impl Appearance {
    /// `Light` when `light` is set, otherwise `Dark`.
    pub fn from_light_flag(light: bool) -> Self {
        if light {
            Appearance::Light
        } else {
            Appearance::Dark
        }
    }
}
