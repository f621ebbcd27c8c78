use std::{fmt, str::FromStr};

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

/// RGB color handed to the renderer alongside bodies and predicted paths.
///
/// Parses from a palette name (`"yellow"`, `"cadetblue4"`, ...) or a `#rrggbb` hex string, and
/// serializes back to the palette name when there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

#[allow(missing_docs)]
impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const ORANGE: Self = Self::rgb(255, 165, 0);
    pub const BROWN: Self = Self::rgb(165, 42, 42);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const DARK_BLUE: Self = Self::rgb(0, 0, 139);
    pub const PINK: Self = Self::rgb(255, 192, 203);
    pub const GREY: Self = Self::rgb(190, 190, 190);
    pub const CHOCOLATE: Self = Self::rgb(210, 105, 30);
    pub const BURLYWOOD4: Self = Self::rgb(139, 115, 85);
    pub const BISQUE: Self = Self::rgb(255, 228, 196);
    pub const BISQUE3: Self = Self::rgb(205, 183, 158);
    pub const CADET_BLUE1: Self = Self::rgb(152, 245, 255);
    pub const CADET_BLUE4: Self = Self::rgb(83, 134, 139);

    /// Colors a body created without an explicit color is drawn from.
    pub const NEW_BODY_PALETTE: [Self; 8] = [
        Self::BLUE,
        Self::RED,
        Self::ORANGE,
        Self::BROWN,
        Self::YELLOW,
        Self::GREEN,
        Self::DARK_BLUE,
        Self::PINK,
    ];

    const NAMED: [(&'static str, Self); 17] = [
        ("white", Self::WHITE),
        ("black", Self::BLACK),
        ("blue", Self::BLUE),
        ("red", Self::RED),
        ("orange", Self::ORANGE),
        ("brown", Self::BROWN),
        ("yellow", Self::YELLOW),
        ("green", Self::GREEN),
        ("darkblue", Self::DARK_BLUE),
        ("pink", Self::PINK),
        ("grey", Self::GREY),
        ("chocolate", Self::CHOCOLATE),
        ("burlywood4", Self::BURLYWOOD4),
        ("bisque", Self::BISQUE),
        ("bisque3", Self::BISQUE3),
        ("cadetblue1", Self::CADET_BLUE1),
        ("cadetblue4", Self::CADET_BLUE4),
    ];

    /// Creates a color from its channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Picks a color of [`Color::NEW_BODY_PALETTE`] at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::NEW_BODY_PALETTE.choose(rng).unwrap_or(&Self::WHITE)
    }

    /// Palette name of the color, if it has one.
    pub fn name(&self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find_map(|(name, color)| (color == self).then_some(*name))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
        }
    }
}

/// Error returned when a string is neither a palette name nor a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color `{}`", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            let channel = |range: std::ops::Range<usize>| {
                hex.get(range)
                    .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            };

            return match (hex.len(), channel(0..2), channel(2..4), channel(4..6)) {
                (6, Some(r), Some(g), Some(b)) => Ok(Self::rgb(r, g, b)),
                _ => Err(ParseColorError(s.to_owned())),
            };
        }

        Self::NAMED
            .iter()
            .find_map(|(name, color)| name.eq_ignore_ascii_case(trimmed).then_some(*color))
            .ok_or_else(|| ParseColorError(s.to_owned()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
