//! Core value types for the cellgrid terminal renderer.
//!
//! This crate provides the pieces a screen grid is made of:
//! - Color representation: [`Color`] (24-bit RGB)
//! - Cell styling: [`Attributes`]
//! - The styled character unit: [`Cell`], generic over a [`CharUnit`]

mod attributes;
mod cell;
mod color;

pub use attributes::Attributes;
pub use cell::{Cell, CharUnit};
pub use color::{Color, ColorParseError};
