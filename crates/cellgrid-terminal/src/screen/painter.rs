//! Full and differential painting of a cell grid.
//!
//! Both passes walk the grid row-major and queue their output through a
//! `BufWriter`, so a frame costs one write on the underlying stream.

use crate::ansi;
use cellgrid_core::{Attributes, Cell, CharUnit};
use std::io::{self, BufWriter, Write};

/// Counters from the last redraw or flush.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintStats {
    /// Characters written.
    pub cells_written: usize,
    /// Cursor-position sequences emitted.
    pub cursor_moves: usize,
    /// Style sequences emitted.
    pub style_changes: usize,
    /// Rows skipped because front and back matched.
    pub rows_skipped: usize,
}

impl PaintStats {
    /// True when the pass produced no output at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells_written == 0 && self.cursor_moves == 0 && self.style_changes == 0
    }
}

/// Placement of a grid on the terminal.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Placement {
    pub(crate) origin: (u16, u16),
    pub(crate) width: u16,
}

impl Placement {
    /// Largest coordinate whose 1-based form still fits in a `u16`.
    const MAX_COORD: u16 = u16::MAX - 1;

    fn terminal_pos(self, x: usize, y: usize) -> (u16, u16) {
        (
            self.origin.0.saturating_add(x as u16).min(Self::MAX_COORD),
            self.origin.1.saturating_add(y as u16).min(Self::MAX_COORD),
        )
    }
}

/// Paints cells and remembers the style the terminal was last left in.
#[derive(Debug, Default)]
pub(crate) struct Painter {
    /// Last style emitted (`None` = unknown).
    pen: Option<Attributes>,
    stats: PaintStats,
}

impl Painter {
    pub(crate) const fn stats(&self) -> PaintStats {
        self.stats
    }

    #[cfg(test)]
    pub(crate) const fn pen(&self) -> Option<Attributes> {
        self.pen
    }

    /// Paint every cell of `front`.
    ///
    /// The pen starts unknown so the first cell always carries its style.
    pub(crate) fn redraw<C: CharUnit, W: Write>(
        &mut self,
        place: Placement,
        front: &[Cell<C>],
        writer: &mut W,
    ) -> io::Result<()> {
        self.stats = PaintStats::default();
        self.pen = None;
        let mut stats = PaintStats::default();
        let mut pen = None;
        let mut out = BufWriter::with_capacity(8192, writer);

        for (y, row) in front.chunks(usize::from(place.width)).enumerate() {
            let (tx, ty) = place.terminal_pos(0, y);
            ansi::move_to(&mut out, tx, ty)?;
            stats.cursor_moves += 1;

            for cell in row {
                if pen != Some(cell.attrs) {
                    ansi::set_style(&mut out, cell.attrs)?;
                    pen = Some(cell.attrs);
                    stats.style_changes += 1;
                }
                cell.ch.encode(&mut out)?;
                stats.cells_written += 1;
            }
        }

        out.flush()?;
        self.pen = pen;
        self.stats = stats;
        Ok(())
    }

    /// Paint only the cells of `front` that differ from `back`.
    ///
    /// Rows that match exactly produce no output. A changed cell gets its
    /// style re-emitted when its attributes changed or when the pen holds a
    /// different style.
    pub(crate) fn flush<C: CharUnit, W: Write>(
        &mut self,
        place: Placement,
        front: &[Cell<C>],
        back: &[Cell<C>],
        writer: &mut W,
    ) -> io::Result<()> {
        debug_assert_eq!(front.len(), back.len(), "front and back must match in size");

        self.stats = PaintStats::default();
        let mut stats = PaintStats::default();
        let mut pen = self.pen.take();
        let mut out = BufWriter::with_capacity(8192, writer);
        let width = usize::from(place.width);

        for (y, (front_row, back_row)) in front.chunks(width).zip(back.chunks(width)).enumerate() {
            if front_row == back_row {
                stats.rows_skipped += 1;
                continue;
            }

            for (x, (cell, old)) in front_row.iter().zip(back_row).enumerate() {
                if cell == old {
                    continue;
                }

                let (tx, ty) = place.terminal_pos(x, y);
                ansi::move_to(&mut out, tx, ty)?;
                stats.cursor_moves += 1;

                if cell.attrs != old.attrs || pen != Some(cell.attrs) {
                    ansi::set_style(&mut out, cell.attrs)?;
                    pen = Some(cell.attrs);
                    stats.style_changes += 1;
                }

                cell.ch.encode(&mut out)?;
                stats.cells_written += 1;
            }
        }

        out.flush()?;
        self.pen = pen;
        self.stats = stats;
        Ok(())
    }
}
