//! Fixed-width bit patterns.  A [`BitPattern`] is a native unsigned
//! integer tagged with its width, so that patterns of different
//! widths cannot be mixed up by accident.  Textually, a pattern is a
//! string of `'0'` and `'1'` characters whose first character is the
//! most significant bit.

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use super::error::BitPatternError;
use super::width::BitWidth;
use super::Signum;

#[cfg(test)]
mod tests;

/// A single binary digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub const fn complement(self) -> Bit {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    fn parse(position: usize, ch: char) -> Result<Bit, BitPatternError> {
        match ch {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            found => Err(BitPatternError::InvalidBitCharacter { position, found }),
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = BitPatternError;
    fn try_from(ch: char) -> Result<Bit, BitPatternError> {
        Bit::parse(0, ch)
    }
}

impl From<Bit> for char {
    fn from(bit: Bit) -> char {
        bit.as_char()
    }
}

impl From<Bit> for u64 {
    fn from(bit: Bit) -> u64 {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

/// A fixed-width pattern of between 1 and 64 bits.  Bits above the
/// width are always zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitPattern {
    bits: u64,
    width: BitWidth,
}

impl BitPattern {
    pub const fn zero(width: BitWidth) -> BitPattern {
        BitPattern { bits: 0, width }
    }

    /// The pattern `1000...0`, which represents the most negative
    /// value of its width.  Negating it gives the same pattern back.
    pub const fn min_signed(width: BitWidth) -> BitPattern {
        BitPattern {
            bits: width.sign_bit_mask(),
            width,
        }
    }

    /// Builds the plain (unsigned) binary representation of `value`,
    /// zero-padded on the left to `width` bits.
    pub fn from_unsigned(value: u64, width: BitWidth) -> Result<BitPattern, BitPatternError> {
        if value & !width.all_bits_mask() != 0 {
            Err(BitPatternError::OutOfRange {
                value: i128::from(value),
                width,
            })
        } else {
            Ok(BitPattern { bits: value, width })
        }
    }

    /// Parses `text` as in [`FromStr`], but also requires that it
    /// has exactly `width` bits.
    pub fn parse_with_width(text: &str, width: BitWidth) -> Result<BitPattern, BitPatternError> {
        let pattern: BitPattern = text.parse()?;
        if pattern.width == width {
            Ok(pattern)
        } else {
            Err(BitPatternError::WidthMismatch {
                expected: width,
                actual: usize::from(pattern.width),
            })
        }
    }

    pub const fn width(&self) -> BitWidth {
        self.width
    }

    /// Returns the bit at `index`, counting from the most
    /// significant bit (which is at index 0).
    pub fn bit(&self, index: usize) -> Option<Bit> {
        if index < usize::from(self.width) {
            Some(self.bit_at(index))
        } else {
            None
        }
    }

    fn bit_at(&self, index: usize) -> Bit {
        let shift = usize::from(self.width) - 1 - index;
        if (self.bits >> shift) & 1 == 0 {
            Bit::Zero
        } else {
            Bit::One
        }
    }

    /// Iterates over the bits, most significant first.
    pub fn bits(&self) -> impl Iterator<Item = Bit> {
        let pattern = *self;
        (0..usize::from(self.width)).map(move |index| pattern.bit_at(index))
    }

    pub const fn msb(&self) -> Bit {
        if self.is_negative() {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.bits == 0
    }

    /// In two's complement, a pattern is negative exactly when its
    /// most significant bit is set.
    pub const fn is_negative(&self) -> bool {
        self.bits & self.width.sign_bit_mask() != 0
    }

    pub const fn signum(&self) -> Signum {
        if self.is_negative() {
            Signum::Negative
        } else if self.is_zero() {
            Signum::Zero
        } else {
            Signum::Positive
        }
    }

    /// Interprets the pattern as a plain unsigned binary number.
    pub const fn unsigned_value(&self) -> u64 {
        self.bits
    }

    /// Computes the one's complement: every bit is inverted.
    pub const fn flip(self) -> BitPattern {
        BitPattern {
            bits: !self.bits & self.width.all_bits_mask(),
            width: self.width,
        }
    }

    /// Computes the two's complement: the one's complement plus one.
    ///
    /// The result has the same width as the input.  Negating the
    /// all-zero pattern carries out of the most significant bit; that
    /// carry is discarded so the result is zero again.  The minimum
    /// value pattern (see [`BitPattern::min_signed`]) negates to
    /// itself.
    pub fn negate(self) -> BitPattern {
        let mut result = self.flip();
        for shift in 0..self.width.get() {
            let bit = 1_u64 << shift;
            if result.bits & bit == 0 {
                result.bits |= bit;
                return result;
            }
            // 1 + 1 = 0, carry 1.
            result.bits &= !bit;
        }
        result
    }

    /// Interprets the pattern as a two's-complement signed integer,
    /// using the pattern's own width.
    pub fn to_signed(self) -> i64 {
        if self.is_negative() {
            let magnitude: u64 = self.negate().unsigned_value();
            // magnitude is in 1..=2^63, and -magnitude is always
            // representable as i64 (2^63 becomes i64::MIN).
            0_i64.wrapping_sub_unsigned(magnitude)
        } else {
            // The sign bit is clear, so this is at most i64::MAX.
            self.bits as i64
        }
    }
}

impl FromStr for BitPattern {
    type Err = BitPatternError;

    fn from_str(s: &str) -> Result<BitPattern, BitPatternError> {
        let parsed: Vec<Bit> = s
            .chars()
            .enumerate()
            .map(|(position, ch)| Bit::parse(position, ch))
            .collect::<Result<_, _>>()?;
        let width = BitWidth::try_from(parsed.len())?;
        let bits = parsed
            .into_iter()
            .fold(0_u64, |acc, bit| (acc << 1) | u64::from(bit));
        Ok(BitPattern { bits, width })
    }
}

impl Display for BitPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{:0width$b}",
            self.bits,
            width = usize::from(self.width)
        )
    }
}

impl Debug for BitPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_tuple("BitPattern")
            .field(&format_args!("{self}"))
            .finish()
    }
}
