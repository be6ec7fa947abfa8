//! Double-buffered terminal screen with diff-based ANSI output.
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::uninlined_format_args)] // "variables can be used directly in format!"
#![allow(clippy::doc_markdown)] // "item in documentation missing backticks"
//!
//! A [`Screen`] keeps two grids of [`Cell`]s: the front buffer callers draw
//! into and the back buffer mirroring what the terminal shows. [`Screen::flush`]
//! sends only the cells that differ; [`Screen::redraw`] repaints everything.
//!
//! # Architecture
//!
//! ```text
//! Command / write_char ──► Screen ──► Painter ──► ansi ──► io::Write
//!                          (front,     (redraw,    (crossterm
//!                           back)       flush)      commands)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use cellgrid_terminal::{Command, Screen, ScreenConfig};
//!
//! let mut screen = Screen::stdout(ScreenConfig::new(40, 10).at(2, 1))?;
//! screen
//!     .apply(Command::set_fg(0, 255, 128))?
//!     .print("hello")
//!     .apply(Command::flush())?;
//! ```

pub mod ansi;
mod command;
mod config;
mod error;
mod screen;

pub use command::Command;
pub use config::ScreenConfig;
pub use error::ScreenError;
pub use screen::{PaintStats, Screen};

// Re-export core types for convenience
pub use cellgrid_core::{Attributes, Cell, CharUnit, Color, ColorParseError};
