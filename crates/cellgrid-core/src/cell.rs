//! Styled character cells and the character types they can hold.

use crate::Attributes;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::io::{self, Write};

/// A fixed-width unit that occupies exactly one terminal cell.
///
/// Implemented for the 8, 16, 32 and 64 bit integers and for `char`. Every
/// unit is one display position, so text is converted one unit per
/// character: byte types take UTF-8 bytes, 16 bit types take the scalar
/// value when it lies in the Basic Multilingual Plane and U+FFFD otherwise,
/// wider types and `char` take the scalar value.
pub trait CharUnit: Copy + Eq + Default + Debug {
    /// The line feed unit.
    const NEWLINE: Self;
    /// The space unit.
    const SPACE: Self;

    /// Append the units encoding `text` to `out`.
    fn extend_from_str(out: &mut Vec<Self>, text: &str);

    /// Write this unit to a byte stream.
    ///
    /// Units that are not a valid scalar value on their own are written
    /// as U+FFFD.
    fn encode<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()>;

    /// Collect the units encoding `text`.
    fn units_of(text: &str) -> Vec<Self> {
        let mut units = Vec::with_capacity(text.len());
        Self::extend_from_str(&mut units, text);
        units
    }
}

const REPLACEMENT: u16 = 0xFFFD;

fn encode_scalar<W: Write + ?Sized>(value: u32, out: &mut W) -> io::Result<()> {
    let ch = char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER);
    let mut buf = [0u8; 4];
    out.write_all(ch.encode_utf8(&mut buf).as_bytes())
}

/// Units written to the terminal as raw bytes.
macro_rules! byte_unit {
    ($($ty:ty),*) => {$(
        #[allow(clippy::unnecessary_cast, clippy::cast_possible_wrap)]
        impl CharUnit for $ty {
            const NEWLINE: Self = b'\n' as Self;
            const SPACE: Self = b' ' as Self;

            fn extend_from_str(out: &mut Vec<Self>, text: &str) {
                out.extend(text.bytes().map(|b| b as Self));
            }

            fn encode<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
                out.write_all(&[self as u8])
            }
        }
    )*};
}

/// Units holding a single BMP scalar value.
macro_rules! bmp_unit {
    ($($ty:ty),*) => {$(
        #[allow(clippy::unnecessary_cast, clippy::cast_possible_wrap)]
        impl CharUnit for $ty {
            const NEWLINE: Self = 0x0A;
            const SPACE: Self = 0x20;

            fn extend_from_str(out: &mut Vec<Self>, text: &str) {
                out.extend(
                    text.chars()
                        .map(|c| u16::try_from(u32::from(c)).unwrap_or(REPLACEMENT) as Self),
                );
            }

            fn encode<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
                encode_scalar(u32::from(self as u16), out)
            }
        }
    )*};
}

/// Units wide enough for any scalar value.
macro_rules! scalar_unit {
    ($($ty:ty),*) => {$(
        #[allow(
            clippy::unnecessary_cast,
            clippy::cast_possible_wrap,
            clippy::useless_conversion,
            clippy::unnecessary_fallible_conversions
        )]
        impl CharUnit for $ty {
            const NEWLINE: Self = 0x0A;
            const SPACE: Self = 0x20;

            fn extend_from_str(out: &mut Vec<Self>, text: &str) {
                out.extend(text.chars().map(|c| u32::from(c) as Self));
            }

            fn encode<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
                encode_scalar(u32::try_from(self).unwrap_or(u32::MAX), out)
            }
        }
    )*};
}

byte_unit!(u8, i8);
bmp_unit!(u16, i16);
scalar_unit!(u32, i32, u64, i64);

impl CharUnit for char {
    const NEWLINE: Self = '\n';
    const SPACE: Self = ' ';

    fn extend_from_str(out: &mut Vec<Self>, text: &str) {
        out.extend(text.chars());
    }

    fn encode<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        encode_scalar(u32::from(self), out)
    }
}

/// A single character position plus its display attributes.
///
/// Two cells are equal only when both the character and every attribute
/// match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell<C> {
    /// The character displayed in this cell.
    pub ch: C,
    /// Colors and flags.
    pub attrs: Attributes,
}

impl<C: CharUnit> Cell<C> {
    /// Create a cell.
    #[must_use]
    pub const fn new(ch: C, attrs: Attributes) -> Self {
        Self { ch, attrs }
    }

    /// Create a cell with default attributes.
    #[must_use]
    pub fn plain(ch: C) -> Self {
        Self::new(ch, Attributes::default())
    }
}
