//! Screen construction parameters.

use crate::ScreenError;
use cellgrid_core::{Attributes, CharUnit, Color};
use serde::{Deserialize, Serialize};

/// Everything needed to build a [`Screen`](crate::Screen).
///
/// All fields are fixed once the screen exists. Missing fields fall back
/// to the defaults when deserializing, so an embedding application can
/// keep only the values it cares about in its own config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "C: CharUnit + Deserialize<'de>"))]
pub struct ScreenConfig<C> {
    /// Terminal position of the screen's top-left corner.
    pub origin: (u16, u16),
    /// Number of columns.
    pub width: u16,
    /// Number of rows.
    pub height: u16,
    /// Character used by the initial contents and by scrolling.
    pub fill: C,
    /// Initial background color.
    pub background: Color,
    /// Initial foreground color.
    pub foreground: Color,
}

impl<C: CharUnit> Default for ScreenConfig<C> {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl<C: CharUnit> ScreenConfig<C> {
    /// Create a config at the terminal origin with default fill and colors.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            origin: (0, 0),
            width,
            height,
            fill: C::SPACE,
            background: Color::BLACK,
            foreground: Color::WHITE,
        }
    }

    /// Create a config covering the whole current terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be queried.
    pub fn from_terminal_size() -> Result<Self, ScreenError> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self::new(width, height))
    }

    /// Place the screen at terminal column `x`, row `y`.
    #[must_use]
    pub fn at(mut self, x: u16, y: u16) -> Self {
        self.origin = (x, y);
        self
    }

    /// Set the fill character.
    #[must_use]
    pub fn fill(mut self, fill: C) -> Self {
        self.fill = fill;
        self
    }

    /// Set the initial background and foreground colors.
    #[must_use]
    pub fn colors(mut self, background: Color, foreground: Color) -> Self {
        self.background = background;
        self.foreground = foreground;
        self
    }

    /// Attributes the screen starts with.
    #[must_use]
    pub const fn attributes(&self) -> Attributes {
        Attributes::new(self.background, self.foreground)
    }

    /// Number of cells in one buffer.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that the grid has at least one cell.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::InvalidDimensions`] if either dimension is zero.
    pub fn validate(&self) -> Result<(), ScreenError> {
        if self.width == 0 || self.height == 0 {
            return Err(ScreenError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
