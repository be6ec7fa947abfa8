//! ANSI escape-sequence emitters.
//!
//! Each function queues one family of sequences onto the writer using
//! crossterm commands. Nothing is flushed here; callers decide when the
//! bytes reach the terminal.
//!
//! | Function | Sequence |
//! |----------|----------|
//! | [`move_to`] | `ESC [ row+1 ; col+1 H` |
//! | [`set_fg`] | `ESC [ 38;2;r;g;b m` |
//! | [`set_bg`] | `ESC [ 48;2;r;g;b m` |
//! | [`set_style`] | reset, fg, bg, then bold/underline |

use cellgrid_core::{Attributes, Color};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color as CrosstermColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use std::io::{self, Write};

/// Convert a cellgrid color to a crossterm truecolor value.
#[must_use]
pub fn to_crossterm(color: Color) -> CrosstermColor {
    CrosstermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Move the terminal cursor to column `x`, row `y` (both 0-based).
pub fn move_to<W: Write>(out: &mut W, x: u16, y: u16) -> io::Result<()> {
    queue!(out, MoveTo(x, y))
}

/// Set the 24-bit foreground color.
pub fn set_fg<W: Write>(out: &mut W, color: Color) -> io::Result<()> {
    queue!(out, SetForegroundColor(to_crossterm(color)))
}

/// Set the 24-bit background color.
pub fn set_bg<W: Write>(out: &mut W, color: Color) -> io::Result<()> {
    queue!(out, SetBackgroundColor(to_crossterm(color)))
}

/// Switch the terminal pen to `attrs`.
///
/// Attributes are reset first so a previous bold or underline never
/// leaks into the new style.
pub fn set_style<W: Write>(out: &mut W, attrs: Attributes) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    set_fg(out, attrs.fg)?;
    set_bg(out, attrs.bg)?;
    if attrs.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if attrs.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}
