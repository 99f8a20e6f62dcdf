//! RGB color for theme.

/// RGB triplet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Tuple for ratatui/crossterm: `(r, g, b)`.
    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}
