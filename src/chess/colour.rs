//! Colours for each player and their pieces.

use thiserror::Error;

/// Colour enumeration.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Colour {
    White = 0,
    Black = 1,
}
impl Colour {
    /// Inverts the colour in place.
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverse()
    }

    /// Returns the inverse of this colour.
    #[inline]
    pub const fn inverse(&self) -> Self {
        if self.is_black() {
            Colour::White
        } else {
            Colour::Black
        }
    }

    /// Checks if the colour variant is white.
    #[inline]
    pub const fn is_white(&self) -> bool {
        matches!(self, Colour::White)
    }

    /// Checks if the colour variant is black.
    #[inline]
    pub const fn is_black(&self) -> bool {
        matches!(self, Colour::Black)
    }
}
impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            if self.is_black() { "black" } else { "white" }
        )
    }
}

/// Error returned when parsing a colour from an unrecognized string.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Error)]
#[error("expected \"white\" or \"black\", found {0:?}")]
pub struct ParseColourError(String);

impl std::str::FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Self::White),
            "black" | "b" => Ok(Self::Black),
            _ => Err(ParseColourError(s.to_string())),
        }
    }
}
