//! Error types for cellgrid-terminal.

use thiserror::Error;

/// Errors that can occur while building or painting a screen.
///
/// Out-of-bounds cell access is not represented here: it is a programming
/// error and panics.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// IO error from terminal output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A screen needs at least one row and one column.
    #[error("Invalid screen dimensions: {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },
}
