//! Display attributes of a cell.

use crate::Color;
use serde::{Deserialize, Serialize};

/// Colors and text flags applied to a cell.
///
/// The default is white text on a black background with no flags set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    /// Background color.
    pub bg: Color,
    /// Foreground color.
    pub fg: Color,
    /// Bold text.
    pub bold: bool,
    /// Underlined text.
    pub underline: bool,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            bg: Color::BLACK,
            fg: Color::WHITE,
            bold: false,
            underline: false,
        }
    }
}

impl Attributes {
    /// Create attributes with the given background and foreground.
    #[must_use]
    pub const fn new(bg: Color, fg: Color) -> Self {
        Self {
            bg,
            fg,
            bold: false,
            underline: false,
        }
    }

    /// Default attributes with a different foreground.
    #[must_use]
    pub const fn with_fg(fg: Color) -> Self {
        Self::new(Color::BLACK, fg)
    }

    /// Set the bold flag.
    #[must_use]
    pub const fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set the underline flag.
    #[must_use]
    pub const fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_default() {
        let a = Attributes::default();
        assert_eq!(a.bg, Color::BLACK);
        assert_eq!(a.fg, Color::WHITE);
        assert!(!a.bold);
        assert!(!a.underline);
    }

    #[test]
    fn test_attributes_new() {
        let a = Attributes::new(Color::gray(10), Color::new(200, 0, 0));
        assert_eq!(a.bg, Color::gray(10));
        assert_eq!(a.fg, Color::new(200, 0, 0));
        assert!(!a.bold && !a.underline);
    }

    #[test]
    fn test_attributes_with_fg_keeps_black_background() {
        let a = Attributes::with_fg(Color::new(0, 255, 0));
        assert_eq!(a.bg, Color::BLACK);
        assert_eq!(a.fg, Color::new(0, 255, 0));
    }

    #[test]
    fn test_attributes_flags() {
        let a = Attributes::default().bold(true).underline(true);
        assert!(a.bold);
        assert!(a.underline);
        assert!(!a.bold(false).bold);
    }

    #[test]
    fn test_attributes_structural_equality() {
        let base = Attributes::default();
        assert_eq!(base, Attributes::new(Color::BLACK, Color::WHITE));
        assert_ne!(base, base.bold(true));
        assert_ne!(base, base.underline(true));
        assert_ne!(base, Attributes::new(Color::gray(1), Color::WHITE));
    }
}
