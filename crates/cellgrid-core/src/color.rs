//! 24-bit RGB color.

use serde::{Deserialize, Serialize};

/// RGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Black color
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White color
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a gray color with every channel set to `level`.
    #[must_use]
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Pack the channels as `0xRRGGBB`.
    #[must_use]
    pub const fn packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Err(ColorParseError::InvalidLength);
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or(ColorParseError::InvalidHex)
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Convert to a `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.packed())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<u8> for Color {
    fn from(level: u8) -> Self {
        Self::gray(level)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 6)"),
        }
    }
}

impl std::error::Error for ColorParseError {}
