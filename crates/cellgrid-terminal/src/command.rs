//! Screen commands.
//!
//! A [`Command`] describes one screen mutation as a value. Applying it has
//! exactly the effect of the matching [`Screen`] call, which makes command
//! sequences easy to build, store and replay:
//!
//! ```ignore
//! screen
//!     .apply(Command::clear(' '))?
//!     .apply(Command::set_fg(255, 200, 0))?
//!     .apply(Command::move_to(2, 1))?
//!     .print("ready")
//!     .apply(Command::flush())?;
//! ```
//!
//! Formatted values never travel through this type; they go through
//! [`Screen::print`] or `fmt::Write`.

use crate::{Screen, ScreenError};
use cellgrid_core::{CharUnit, Color};
use std::io::Write;

/// A single screen mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<C> {
    /// Move the write cursor.
    Move { x: u16, y: u16 },
    /// Fill the front buffer with a character.
    Clear(C),
    /// Set one cell with the cursor attributes.
    Plot { x: u16, y: u16, ch: C },
    /// Paint pending changes to the terminal.
    Flush,
    /// Change the cursor colors; `None` leaves a color as it is.
    Recolor {
        fg: Option<Color>,
        bg: Option<Color>,
    },
}

impl<C: CharUnit> Command<C> {
    /// Move the cursor to `(x, y)`.
    #[must_use]
    pub const fn move_to(x: u16, y: u16) -> Self {
        Self::Move { x, y }
    }

    /// Clear the screen with `ch`.
    #[must_use]
    pub const fn clear(ch: C) -> Self {
        Self::Clear(ch)
    }

    /// Clear the screen with the zero character.
    #[must_use]
    pub fn clear_default() -> Self {
        Self::Clear(C::default())
    }

    /// Put `ch` at `(x, y)`.
    #[must_use]
    pub const fn plot(x: u16, y: u16, ch: C) -> Self {
        Self::Plot { x, y, ch }
    }

    /// Flush the screen.
    #[must_use]
    pub const fn flush() -> Self {
        Self::Flush
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn set_fg(r: u8, g: u8, b: u8) -> Self {
        Self::Recolor {
            fg: Some(Color::new(r, g, b)),
            bg: None,
        }
    }

    /// Set the background color.
    #[must_use]
    pub const fn set_bg(r: u8, g: u8, b: u8) -> Self {
        Self::Recolor {
            fg: None,
            bg: Some(Color::new(r, g, b)),
        }
    }

    /// Set both colors.
    #[must_use]
    pub const fn set_color(fg: Color, bg: Color) -> Self {
        Self::Recolor {
            fg: Some(fg),
            bg: Some(bg),
        }
    }

    /// Perform the mutation on `screen`.
    ///
    /// # Errors
    ///
    /// Only [`Command::Flush`] can fail, when the terminal write fails.
    ///
    /// # Panics
    ///
    /// [`Command::Plot`] panics for a position outside the grid.
    pub fn apply<W: Write>(self, screen: &mut Screen<C, W>) -> Result<(), ScreenError> {
        match self {
            Self::Move { x, y } => screen.set_cursor(x, y),
            Self::Clear(ch) => screen.clear(ch),
            Self::Plot { x, y, ch } => screen.set_cell(x, y, ch),
            Self::Flush => screen.flush()?,
            Self::Recolor { fg, bg } => {
                if let Some(bg) = bg {
                    screen.set_bg(bg);
                }
                if let Some(fg) = fg {
                    screen.set_fg(fg);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScreenConfig;
    use cellgrid_core::{Attributes, Cell};

    fn screen() -> Screen<char, Vec<u8>> {
        let mut screen = Screen::new(ScreenConfig::new(4, 3), Vec::new()).unwrap();
        screen.writer_mut().clear();
        screen
    }

    #[test]
    fn test_command_constructors() {
        assert_eq!(Command::<char>::move_to(1, 2), Command::Move { x: 1, y: 2 });
        assert_eq!(Command::clear('x'), Command::Clear('x'));
        assert_eq!(Command::<u8>::clear_default(), Command::Clear(0));
        assert_eq!(Command::plot(3, 4, 'p'), Command::Plot { x: 3, y: 4, ch: 'p' });
        assert_eq!(Command::<char>::flush(), Command::Flush);
        assert_eq!(
            Command::<char>::set_fg(1, 2, 3),
            Command::Recolor {
                fg: Some(Color::new(1, 2, 3)),
                bg: None
            }
        );
        assert_eq!(
            Command::<char>::set_bg(4, 5, 6),
            Command::Recolor {
                fg: None,
                bg: Some(Color::new(4, 5, 6))
            }
        );
    }

    #[test]
    fn test_apply_move() {
        let mut s = screen();
        s.apply(Command::move_to(3, 2)).unwrap();
        assert_eq!(s.cursor(), (3, 2));
    }

    #[test]
    fn test_apply_clear() {
        let mut s = screen();
        s.apply(Command::clear('*')).unwrap();
        assert!(s.front().iter().all(|c| c.ch == '*'));
    }

    #[test]
    fn test_apply_clear_default_uses_zero_char() {
        let mut s = screen();
        s.apply(Command::clear_default()).unwrap();
        assert!(s.front().iter().all(|c| c.ch == '\0'));
    }

    #[test]
    fn test_apply_plot() {
        let mut s = screen();
        s.apply(Command::plot(1, 2, 'P')).unwrap();
        assert_eq!(s.cell(1, 2), Some(&Cell::plain('P')));
        assert_eq!(s.cursor(), (0, 0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_apply_plot_out_of_bounds_panics() {
        let mut s = screen();
        let _ = s.apply(Command::plot(4, 0, 'P'));
    }

    #[test]
    fn test_apply_recolor_single_side() {
        let mut s = screen();
        s.apply(Command::set_fg(10, 20, 30)).unwrap();
        assert_eq!(s.cursor_attributes().fg, Color::new(10, 20, 30));
        assert_eq!(s.cursor_attributes().bg, Color::BLACK);

        s.apply(Command::set_bg(40, 50, 60)).unwrap();
        assert_eq!(s.cursor_attributes().fg, Color::new(10, 20, 30));
        assert_eq!(s.cursor_attributes().bg, Color::new(40, 50, 60));
    }

    #[test]
    fn test_apply_set_color() {
        let mut s = screen();
        s.apply(Command::set_color(Color::gray(1), Color::gray(2)))
            .unwrap();
        assert_eq!(
            s.cursor_attributes(),
            Attributes::new(Color::gray(2), Color::gray(1))
        );
    }

    #[test]
    fn test_apply_flush() {
        let mut s = screen();
        s.set_cell(0, 0, 'f');
        s.apply(Command::flush()).unwrap();
        assert_eq!(s.front(), s.back());
        assert_eq!(s.writer().as_slice(), b"\x1b[1;1Hf");
    }

    #[test]
    fn test_chained_application_matches_direct_calls() {
        let mut chained = screen();
        chained
            .apply(Command::set_fg(200, 0, 0))
            .unwrap()
            .apply(Command::move_to(1, 1))
            .unwrap()
            .print("ab")
            .apply(Command::plot(0, 0, 'z'))
            .unwrap()
            .apply(Command::flush())
            .unwrap();

        let mut direct = screen();
        direct.set_fg(Color::new(200, 0, 0));
        direct.set_cursor(1, 1);
        direct.write_string("ab".chars());
        direct.set_cell(0, 0, 'z');
        direct.flush().unwrap();

        assert_eq!(chained.front(), direct.front());
        assert_eq!(chained.cursor(), direct.cursor());
        assert_eq!(chained.writer(), direct.writer());
    }

    #[test]
    fn test_apply_all_in_order() {
        let mut s = screen();
        s.apply_all([
            Command::clear('.'),
            Command::plot(0, 0, 'a'),
            Command::clear('-'),
        ])
        .unwrap();
        assert!(s.front().iter().all(|c| c.ch == '-'));
    }

    #[test]
    fn test_print_digit_is_text_not_command() {
        let mut s = screen();
        s.print(&7u8);
        assert_eq!(s.cell(0, 0).unwrap().ch, '7');
        assert_eq!(s.cursor(), (1, 0));
    }
}
