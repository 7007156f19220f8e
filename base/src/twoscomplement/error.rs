//! Basic error reporting.

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use super::width::BitWidth;

/// Represents a failure to build, convert or interpret one of the
/// bit pattern types defined in the base crate.  All of these are
/// caller errors; none of them is transient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitPatternError {
    /// The input contained something other than `'0'` or `'1'`.
    /// `position` counts characters from the left (the MSB) starting
    /// at 0.
    InvalidBitCharacter { position: usize, found: char },
    /// The value does not fit in the signed (or, for
    /// [`BitPattern::from_unsigned`](super::pattern::BitPattern::from_unsigned),
    /// unsigned) range of the requested width.
    OutOfRange { value: i128, width: BitWidth },
    /// The caller said the pattern should have `expected` bits, but
    /// it has `actual`.
    WidthMismatch { expected: BitWidth, actual: usize },
    /// Bit patterns must have between 1 and [`BitWidth::MAX_BITS`]
    /// bits.
    UnsupportedWidth(usize),
}

impl Error for BitPatternError {}

impl Display for BitPatternError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            BitPatternError::InvalidBitCharacter { position, found } => {
                write!(
                    f,
                    "invalid bit character {found:?} at position {position} (only '0' and '1' are allowed)"
                )
            }
            BitPatternError::OutOfRange { value, width } => {
                write!(f, "value {value} does not fit in {width}")
            }
            BitPatternError::WidthMismatch { expected, actual } => {
                write!(
                    f,
                    "expected a pattern of {expected} but it has {actual} bits"
                )
            }
            BitPatternError::UnsupportedWidth(n) => {
                write!(
                    f,
                    "unsupported width of {n} bits (must be between 1 and {})",
                    BitWidth::MAX_BITS
                )
            }
        }
    }
}
