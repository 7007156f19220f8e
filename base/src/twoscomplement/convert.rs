//! Conversions between signed integers and their two's complement
//! bit patterns, plus string-in, string-out forms of the complement
//! operations.

use super::error::BitPatternError;
use super::pattern::BitPattern;
use super::width::BitWidth;


/// Computes the one's complement of a textual bit pattern.
///
/// The output has the same length as the input, and each character
/// is the complement of the input character at the same position.
pub fn bit_flip(input: &str) -> Result<String, BitPatternError> {
    let pattern: BitPattern = input.parse()?;
    Ok(pattern.flip().to_string())
}

/// Computes the two's complement of a textual bit pattern (see
/// [`BitPattern::negate`]).
pub fn negate(input: &str) -> Result<String, BitPatternError> {
    let pattern: BitPattern = input.parse()?;
    Ok(pattern.negate().to_string())
}

/// Returns the smallest and largest values representable in `width`
/// bits of two's complement.
pub fn range_for_width(width: BitWidth) -> (i64, i64) {
    width.range()
}

/// The intermediate results of encoding a signed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingSteps {
    pub value: i64,
    /// The absolute value of `value`, in plain binary.
    pub magnitude: BitPattern,
    /// The one's complement of `magnitude`.  This is only computed
    /// for negative values.
    pub ones_complement: Option<BitPattern>,
    pub encoded: BitPattern,
}

/// Encodes `value` in `width` bits, keeping the intermediate steps.
///
/// Non-negative values are simply zero-padded.  For negative values
/// we zero-pad the absolute value and then take the two's complement
/// of that.
pub fn explain_encoding(value: i64, width: BitWidth) -> Result<EncodingSteps, BitPatternError> {
    let (min, max) = range_for_width(width);
    if !(min..=max).contains(&value) {
        return Err(BitPatternError::OutOfRange {
            value: i128::from(value),
            width,
        });
    }
    // For value == min, the magnitude is 2^(width-1), which still
    // fits in width bits.
    let magnitude = BitPattern::from_unsigned(value.unsigned_abs(), width)?;
    if value < 0 {
        let ones = magnitude.flip();
        Ok(EncodingSteps {
            value,
            magnitude,
            ones_complement: Some(ones),
            encoded: magnitude.negate(),
        })
    } else {
        Ok(EncodingSteps {
            value,
            magnitude,
            ones_complement: None,
            encoded: magnitude,
        })
    }
}

/// Produces the `width`-bit two's complement representation of
/// `value`.
pub fn encode_signed(value: i64, width: BitWidth) -> Result<BitPattern, BitPatternError> {
    explain_encoding(value, width).map(|steps| steps.encoded)
}

/// Interprets a textual bit pattern as a two's complement signed
/// integer.  The length of the input is the width.
pub fn decode_signed(input: &str) -> Result<i64, BitPatternError> {
    let pattern: BitPattern = input.parse()?;
    Ok(pattern.to_signed())
}

/// As [`decode_signed`], but the input must have exactly `width`
/// bits.
pub fn decode_signed_with_width(input: &str, width: BitWidth) -> Result<i64, BitPatternError> {
    BitPattern::parse_with_width(input, width).map(BitPattern::to_signed)
}
