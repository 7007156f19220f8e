//! The number of bits in a fixed-width pattern.

use std::fmt::{self, Display, Formatter};

use super::error::BitPatternError;

/// The width (in bits) of a fixed-width bit pattern.  A `BitWidth`
/// is always between 1 and [`BitWidth::MAX_BITS`] inclusive, so that
/// every pattern fits in a native `u64` and every signed value fits
/// in an `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitWidth(u32);

impl BitWidth {
    pub const MAX_BITS: u32 = u64::BITS;

    pub const W4: BitWidth = BitWidth(4);
    pub const W8: BitWidth = BitWidth(8);
    pub const W16: BitWidth = BitWidth(16);
    pub const W32: BitWidth = BitWidth(32);
    pub const W64: BitWidth = BitWidth(64);

    /// Usable in a const context (see the `width!` macro), which is
    /// why this returns an `Option` and not a `Result`.
    pub const fn new_const(n: u32) -> Option<BitWidth> {
        if n == 0 || n > Self::MAX_BITS {
            None
        } else {
            Some(BitWidth(n))
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The mask selecting the most significant (sign) bit.
    #[inline]
    pub const fn sign_bit_mask(self) -> u64 {
        1_u64 << (self.0 - 1)
    }

    /// The mask selecting every bit of a pattern of this width.
    #[inline]
    pub const fn all_bits_mask(self) -> u64 {
        u64::MAX >> (u64::BITS - self.0)
    }

    /// Returns the smallest and largest signed values representable
    /// in two's complement with this many bits, that is
    /// `-(2^(n-1))` and `2^(n-1) - 1`.
    pub const fn range(self) -> (i64, i64) {
        // The sign bit mask is at most 2^63, so this is at most
        // i64::MAX.
        let max = (self.sign_bit_mask() - 1) as i64;
        (-max - 1, max)
    }
}

impl Display for BitWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self.0 {
            1 => f.write_str("1 bit"),
            n => write!(f, "{n} bits"),
        }
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = BitPatternError;
    fn try_from(n: u32) -> Result<BitWidth, BitPatternError> {
        BitWidth::new_const(n).ok_or(BitPatternError::UnsupportedWidth(n as usize))
    }
}

impl TryFrom<usize> for BitWidth {
    type Error = BitPatternError;
    fn try_from(n: usize) -> Result<BitWidth, BitPatternError> {
        match u32::try_from(n) {
            Ok(bits) => BitWidth::try_from(bits),
            Err(_) => Err(BitPatternError::UnsupportedWidth(n)),
        }
    }
}

impl From<BitWidth> for u32 {
    fn from(w: BitWidth) -> u32 {
        w.0
    }
}

impl From<BitWidth> for usize {
    fn from(w: BitWidth) -> usize {
        w.0 as usize
    }
}

#[test]
fn test_try_from_rejects_zero_and_too_wide() {
    assert_eq!(
        BitWidth::try_from(0_u32),
        Err(BitPatternError::UnsupportedWidth(0))
    );
    assert_eq!(
        BitWidth::try_from(65_u32),
        Err(BitPatternError::UnsupportedWidth(65))
    );
    assert_eq!(
        BitWidth::try_from(usize::MAX),
        Err(BitPatternError::UnsupportedWidth(usize::MAX))
    );
    assert_eq!(BitWidth::try_from(1_u32).map(BitWidth::get), Ok(1));
    assert_eq!(BitWidth::try_from(64_usize), Ok(BitWidth::W64));
}

#[test]
fn test_masks() {
    assert_eq!(BitWidth::W8.sign_bit_mask(), 0b1000_0000);
    assert_eq!(BitWidth::W8.all_bits_mask(), 0b1111_1111);
    assert_eq!(BitWidth::W4.all_bits_mask(), 0b1111);
    assert_eq!(BitWidth::W64.sign_bit_mask(), 1_u64 << 63);
    assert_eq!(BitWidth::W64.all_bits_mask(), u64::MAX);
    let one = BitWidth::try_from(1_u32).expect("1 is a valid width");
    assert_eq!(one.sign_bit_mask(), 1);
    assert_eq!(one.all_bits_mask(), 1);
}

#[test]
fn test_range() {
    assert_eq!(BitWidth::W4.range(), (-8, 7));
    assert_eq!(BitWidth::W8.range(), (-128, 127));
    assert_eq!(BitWidth::W16.range(), (-32768, 32767));
    assert_eq!(
        BitWidth::W32.range(),
        (i64::from(i32::MIN), i64::from(i32::MAX))
    );
    assert_eq!(BitWidth::W64.range(), (i64::MIN, i64::MAX));
}

#[test]
fn test_display() {
    assert_eq!(BitWidth::W8.to_string(), "8 bits");
    assert_eq!(
        BitWidth::try_from(1_u32)
            .expect("1 is a valid width")
            .to_string(),
        "1 bit"
    );
}
