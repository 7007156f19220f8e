//! This module implements fixed-width bit patterns and the one's
//! complement and two's complement operations on them, plus
//! conversion between signed integers and their two's complement
//! representation.

pub mod convert;
pub mod error;
pub mod pattern;
pub mod width;

/// The sign of a number (mathematically, sgn(x)).  In two's
/// complement there is only one zero, and the most significant bit
/// alone tells us whether the value is negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signum {
    Negative = -1, // <= -1
    Zero = 0,
    Positive = 1, // >= +1
}
