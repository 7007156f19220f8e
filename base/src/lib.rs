//! The `base` crate (package `complements`) defines fixed-width bit
//! patterns and the one's complement and two's complement operations
//! on them.  The idea is that a program which wants to display or
//! check two's complement encodings would depend on this crate but
//! would not need to do any bit twiddling itself.
//!
//! Everything here is a pure function of its inputs.

mod twoscomplement;

pub mod prelude;
pub use crate::twoscomplement::convert::*;
pub use crate::twoscomplement::error::BitPatternError;
pub use crate::twoscomplement::pattern::{Bit, BitPattern};
pub use crate::twoscomplement::width::BitWidth;
pub use crate::twoscomplement::Signum;

/// Builds a [`BitWidth`] at compile time.  Widths outside `1..=64`
/// are rejected by the compiler.
#[macro_export]
macro_rules! width {
    ($n:expr) => {{
        const W: $crate::BitWidth = match $crate::BitWidth::new_const($n) {
            Some(w) => w,
            None => panic!("bit width must be between 1 and 64"),
        };
        W
    }};
}

#[test]
fn test_width_macro() {
    let w: BitWidth = width!(8);
    assert_eq!(w, BitWidth::W8);
    let one: BitWidth = width!(1);
    assert_eq!(BitWidth::try_from(1_u32), Ok(one));
}

#[test]
fn test_literal_scenarios() {
    assert_eq!(bit_flip("10110011"), Ok("01001100".to_string()));
    assert_eq!(negate("01011100"), Ok("10100100".to_string()));
    assert_eq!(
        encode_signed(-23, width!(8)).map(|p| p.to_string()),
        Ok("11101001".to_string())
    );
    assert_eq!(decode_signed("11101001"), Ok(-23));
    assert_eq!(
        encode_signed(-128, width!(8)).map(|p| p.to_string()),
        Ok("10000000".to_string())
    );
    assert_eq!(decode_signed("10000000"), Ok(-128));
    assert_eq!(
        encode_signed(127, width!(8)).map(|p| p.to_string()),
        Ok("01111111".to_string())
    );
    assert_eq!(range_for_width(width!(8)), (-128, 127));
}
