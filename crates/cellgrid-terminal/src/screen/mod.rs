//! Double-buffered screen.
//!
//! # Architecture
//!
//! ```text
//! write_char / set_cell / Command ──► front ──┐
//!                                             ├─► Painter ──► io::Write
//!                                  back ◄─────┘   (redraw | flush)
//! ```
//!
//! The front buffer holds the desired contents, the back buffer what the
//! terminal last showed. `redraw` paints everything; `flush` paints only
//! the difference. Both leave `back == front`.

mod painter;

pub use painter::PaintStats;

use crate::command::Command;
use crate::{ScreenConfig, ScreenError};
use cellgrid_core::{Attributes, Cell, CharUnit, Color};
use painter::{Painter, Placement};
use std::fmt::{self, Display};
use std::io::{self, Stdout, Write};
use tracing::{debug, trace};

/// A fixed-size grid of styled cells synchronized to a terminal.
///
/// `C` is the character unit stored per cell and `W` the stream that
/// receives escape sequences.
#[derive(Debug)]
pub struct Screen<C, W = Stdout> {
    origin: (u16, u16),
    width: u16,
    height: u16,
    front: Vec<Cell<C>>,
    back: Vec<Cell<C>>,
    /// Write head; the row may equal `height` until the next write scrolls.
    cursor_x: u16,
    cursor_y: u16,
    attrs: Attributes,
    fill: C,
    painter: Painter,
    writer: W,
}

impl<C: CharUnit> Screen<C, Stdout> {
    /// Create a screen painting to standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the initial redraw fails.
    pub fn stdout(config: ScreenConfig<C>) -> Result<Self, ScreenError> {
        Self::new(config, io::stdout())
    }
}

impl<C: CharUnit, W: Write> Screen<C, W> {
    /// Create a screen and paint it once.
    ///
    /// Every cell starts as the fill character in the configured colors.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::InvalidDimensions`] for a zero-sized grid and
    /// [`ScreenError::Io`] if the initial redraw cannot be written.
    pub fn new(config: ScreenConfig<C>, writer: W) -> Result<Self, ScreenError> {
        config.validate()?;

        let attrs = config.attributes();
        let front = vec![Cell::new(config.fill, attrs); config.area()];
        let mut screen = Self {
            origin: config.origin,
            width: config.width,
            height: config.height,
            back: front.clone(),
            front,
            cursor_x: 0,
            cursor_y: 0,
            attrs,
            fill: config.fill,
            painter: Painter::default(),
            writer,
        };
        screen.redraw()?;
        Ok(screen)
    }

    // =========================================================================
    // Geometry and state
    // =========================================================================

    /// Terminal position of the top-left cell.
    #[must_use]
    pub const fn origin(&self) -> (u16, u16) {
        self.origin
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Cursor position as `(x, y)`.
    #[must_use]
    pub const fn cursor(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    /// Attributes given to the next written cell.
    #[must_use]
    pub const fn cursor_attributes(&self) -> Attributes {
        self.attrs
    }

    /// Character used for rows introduced by scrolling.
    #[must_use]
    pub const fn fill_char(&self) -> C {
        self.fill
    }

    /// Move the write head. The position is checked on the next write.
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Set the foreground for subsequent writes.
    pub fn set_fg(&mut self, color: Color) {
        self.attrs.fg = color;
    }

    /// Set the background for subsequent writes.
    pub fn set_bg(&mut self, color: Color) {
        self.attrs.bg = color;
    }

    /// Set the bold flag for subsequent writes.
    pub fn set_bold(&mut self, bold: bool) {
        self.attrs.bold = bold;
    }

    /// Set the underline flag for subsequent writes.
    pub fn set_underline(&mut self, underline: bool) {
        self.attrs.underline = underline;
    }

    /// Replace all cursor attributes at once.
    pub fn set_attributes(&mut self, attrs: Attributes) {
        self.attrs = attrs;
    }

    // =========================================================================
    // Buffers
    // =========================================================================

    /// Desired contents, row-major.
    #[must_use]
    pub fn front(&self) -> &[Cell<C>] {
        &self.front
    }

    /// Contents last painted to the terminal, row-major.
    #[must_use]
    pub fn back(&self) -> &[Cell<C>] {
        &self.back
    }

    /// One row of the front buffer.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[must_use]
    pub fn row(&self, y: u16) -> &[Cell<C>] {
        assert!(y < self.height, "row {y} outside {}-row screen", self.height);
        let start = self.index(0, y);
        &self.front[start..start + usize::from(self.width)]
    }

    /// A front-buffer cell, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell<C>> {
        if x < self.width && y < self.height {
            Some(&self.front[self.index(x, y)])
        } else {
            None
        }
    }

    /// The output stream.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// The output stream, mutably.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the screen and return its output stream.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Counters from the last redraw or flush.
    #[must_use]
    pub const fn last_paint(&self) -> PaintStats {
        self.painter.stats()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Write `ch` with the cursor attributes at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_cell(&mut self, x: u16, y: u16, ch: C) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} screen",
            self.width,
            self.height
        );
        let idx = self.index(x, y);
        self.front[idx] = Cell::new(ch, self.attrs);
    }

    /// Write one character at the cursor, terminal style.
    ///
    /// A cursor sitting one row past the bottom scrolls first. A newline
    /// moves to the start of the next row without scrolling; the scroll
    /// happens on the following write. Reaching the right edge wraps.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is outside the grid when a character is placed.
    pub fn write_char(&mut self, ch: C) {
        if self.cursor_y == self.height {
            self.scroll();
        }

        if ch == C::NEWLINE {
            self.cursor_x = 0;
            self.cursor_y = self.cursor_y.saturating_add(1);
        } else {
            self.set_cell(self.cursor_x, self.cursor_y, ch);
            self.cursor_x += 1;
        }

        if self.cursor_x == self.width {
            self.cursor_x = 0;
            self.cursor_y = self.cursor_y.saturating_add(1);
        }
    }

    /// Write each unit in order, as [`write_char`](Self::write_char) would.
    pub fn write_string<I>(&mut self, units: I)
    where
        I: IntoIterator<Item = C>,
    {
        for ch in units {
            self.write_char(ch);
        }
    }

    /// Format `value` and write the resulting text at the cursor.
    pub fn print<T: Display + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.write_string(C::units_of(&value.to_string()));
        self
    }

    /// Fill the whole front buffer with `fill` in the cursor attributes.
    pub fn clear(&mut self, fill: C) {
        self.front.fill(Cell::new(fill, self.attrs));
    }

    /// Drop the top row and append a blank one.
    ///
    /// The new row uses the fill character and the cursor attributes. The
    /// cursor moves to the last row. Only the front buffer changes.
    pub fn scroll(&mut self) {
        let width = usize::from(self.width);
        let len = self.front.len();
        self.front.rotate_left(width);
        self.front[len - width..].fill(Cell::new(self.fill, self.attrs));
        self.cursor_y = self.height - 1;
        trace!(height = self.height, "scrolled screen");
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Apply a command and return the screen for chaining.
    ///
    /// # Errors
    ///
    /// Returns an error if a flush command fails to write.
    pub fn apply(&mut self, command: Command<C>) -> Result<&mut Self, ScreenError> {
        command.apply(self)?;
        Ok(self)
    }

    /// Apply commands left to right, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error a command produced.
    pub fn apply_all<I>(&mut self, commands: I) -> Result<&mut Self, ScreenError>
    where
        I: IntoIterator<Item = Command<C>>,
    {
        for command in commands {
            command.apply(self)?;
        }
        Ok(self)
    }

    // =========================================================================
    // Synchronization
    // =========================================================================

    /// Repaint every cell, then copy front into back.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails. The back buffer is left as it
    /// was, so a later redraw still repaints everything.
    pub fn redraw(&mut self) -> Result<(), ScreenError> {
        let place = self.placement();
        self.painter.redraw(place, &self.front, &mut self.writer)?;
        self.back.clone_from(&self.front);

        let stats = self.painter.stats();
        debug!(
            cells = stats.cells_written,
            moves = stats.cursor_moves,
            styles = stats.style_changes,
            "redraw"
        );
        Ok(())
    }

    /// Paint the cells that changed since the last redraw or flush, then
    /// copy front into back.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails. The back buffer is left as it
    /// was, so the next flush retries the same cells.
    pub fn flush(&mut self) -> Result<(), ScreenError> {
        let place = self.placement();
        self.painter
            .flush(place, &self.front, &self.back, &mut self.writer)?;
        self.back.clone_from(&self.front);

        let stats = self.painter.stats();
        debug!(
            cells = stats.cells_written,
            moves = stats.cursor_moves,
            styles = stats.style_changes,
            rows_skipped = stats.rows_skipped,
            "flush"
        );
        Ok(())
    }

    const fn placement(&self) -> Placement {
        Placement {
            origin: self.origin,
            width: self.width,
        }
    }
}

/// Formatted output goes through [`Screen::write_string`].
///
/// ```ignore
/// use std::fmt::Write as _;
/// write!(screen, "{} items", 3)?;
/// ```
impl<C: CharUnit, W: Write> fmt::Write for Screen<C, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(C::units_of(s));
        Ok(())
    }
}
