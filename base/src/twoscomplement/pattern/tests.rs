use super::super::error::BitPatternError;
use super::super::width::BitWidth;
use super::super::Signum;
use super::{Bit, BitPattern};

fn pat(s: &str) -> BitPattern {
    s.parse().expect("test data should be a valid bit pattern")
}

#[test]
fn test_parse_and_display() {
    for s in ["0", "1", "0101", "10110011", "0000000000000000"] {
        let p = pat(s);
        assert_eq!(p.to_string(), s);
        assert_eq!(usize::from(p.width()), s.len());
    }
    assert_eq!(pat("00000101").unsigned_value(), 5);
    assert_eq!(format!("{:?}", pat("0110")), "BitPattern(0110)");
}

#[test]
fn test_parse_64_bits() {
    let s = "1".repeat(64);
    let p = pat(&s);
    assert_eq!(p.width(), BitWidth::W64);
    assert_eq!(p.unsigned_value(), u64::MAX);
    assert_eq!(p.to_string(), s);
}

#[test]
fn test_parse_rejects_bad_characters() {
    assert_eq!(
        "10201".parse::<BitPattern>(),
        Err(BitPatternError::InvalidBitCharacter {
            position: 2,
            found: '2'
        })
    );
    assert_eq!(
        " 101".parse::<BitPattern>(),
        Err(BitPatternError::InvalidBitCharacter {
            position: 0,
            found: ' '
        })
    );
    // Bad characters are reported even when the input is also too
    // long.
    let long_and_bad = format!("{}x", "0".repeat(70));
    assert_eq!(
        long_and_bad.parse::<BitPattern>(),
        Err(BitPatternError::InvalidBitCharacter {
            position: 70,
            found: 'x'
        })
    );
}

#[test]
fn test_parse_rejects_unsupported_widths() {
    assert_eq!(
        "".parse::<BitPattern>(),
        Err(BitPatternError::UnsupportedWidth(0))
    );
    assert_eq!(
        "0".repeat(65).parse::<BitPattern>(),
        Err(BitPatternError::UnsupportedWidth(65))
    );
}

#[test]
fn test_parse_with_width() {
    assert_eq!(
        BitPattern::parse_with_width("0101", BitWidth::W4),
        Ok(pat("0101"))
    );
    assert_eq!(
        BitPattern::parse_with_width("0101", BitWidth::W8),
        Err(BitPatternError::WidthMismatch {
            expected: BitWidth::W8,
            actual: 4
        })
    );
}

#[test]
fn test_from_unsigned() {
    assert_eq!(
        BitPattern::from_unsigned(23, BitWidth::W8).map(|p| p.to_string()),
        Ok("00010111".to_string())
    );
    assert_eq!(
        BitPattern::from_unsigned(255, BitWidth::W8).map(|p| p.to_string()),
        Ok("11111111".to_string())
    );
    assert_eq!(
        BitPattern::from_unsigned(256, BitWidth::W8),
        Err(BitPatternError::OutOfRange {
            value: 256,
            width: BitWidth::W8
        })
    );
    assert_eq!(
        BitPattern::from_unsigned(u64::MAX, BitWidth::W64).map(|p| p.unsigned_value()),
        Ok(u64::MAX)
    );
}

#[test]
fn test_bit_indexing_is_msb_first() {
    let p = pat("1000");
    assert_eq!(p.bit(0), Some(Bit::One));
    assert_eq!(p.bit(1), Some(Bit::Zero));
    assert_eq!(p.bit(3), Some(Bit::Zero));
    assert_eq!(p.bit(4), None);
    assert_eq!(p.msb(), Bit::One);
    let text: String = pat("0110").bits().map(char::from).collect();
    assert_eq!(text, "0110");
}

#[test]
fn test_bit_conversions() {
    assert_eq!(Bit::try_from('0'), Ok(Bit::Zero));
    assert_eq!(Bit::try_from('1'), Ok(Bit::One));
    assert_eq!(
        Bit::try_from('a'),
        Err(BitPatternError::InvalidBitCharacter {
            position: 0,
            found: 'a'
        })
    );
    assert_eq!(Bit::Zero.complement(), Bit::One);
    assert_eq!(Bit::One.complement(), Bit::Zero);
}

#[test]
fn test_signum() {
    assert_eq!(pat("0000").signum(), Signum::Zero);
    assert_eq!(pat("0001").signum(), Signum::Positive);
    assert_eq!(pat("0111").signum(), Signum::Positive);
    assert_eq!(pat("1000").signum(), Signum::Negative);
    assert_eq!(pat("1111").signum(), Signum::Negative);
}

#[test]
fn test_flip() {
    assert_eq!(pat("10110011").flip(), pat("01001100"));
    assert_eq!(pat("0").flip(), pat("1"));
    assert_eq!(pat("0000").flip(), pat("1111"));
}

#[test]
fn test_negate() {
    assert_eq!(pat("01011100").negate(), pat("10100100"));
    assert_eq!(pat("00010111").negate(), pat("11101001"));
    assert_eq!(pat("00000001").negate(), pat("11111111"));
    assert_eq!(pat("11111111").negate(), pat("00000001"));
}

#[test]
fn test_negate_zero_discards_carry() {
    // Flipping gives all ones, and adding one carries out of the
    // sign bit.  The carry is lost and the width does not change.
    assert_eq!(pat("0000").negate(), pat("0000"));
    assert_eq!(pat("0").negate(), pat("0"));
    let zero64 = BitPattern::zero(BitWidth::W64);
    assert_eq!(zero64.negate(), zero64);
}

#[test]
fn test_negate_minimum_is_fixed_point() {
    for w in [1_u32, 2, 4, 8, 16, 32, 64] {
        let width = BitWidth::try_from(w).expect("valid width");
        let min = BitPattern::min_signed(width);
        assert_eq!(min.negate(), min, "failed for width {w}");
    }
    assert_eq!(pat("10000000").negate(), pat("10000000"));
}

#[test]
fn test_to_signed() {
    assert_eq!(pat("11101001").to_signed(), -23);
    assert_eq!(pat("01100100").to_signed(), 100);
    assert_eq!(pat("11100100").to_signed(), -28);
    assert_eq!(pat("10000000").to_signed(), -128);
    assert_eq!(pat("01111111").to_signed(), 127);
    assert_eq!(pat("1").to_signed(), -1);
    assert_eq!(pat("0").to_signed(), 0);
    assert_eq!(BitPattern::min_signed(BitWidth::W64).to_signed(), i64::MIN);
}

#[cfg(test)]
mod pattern_proptests {
    use super::super::super::width::BitWidth;
    use super::super::{Bit, BitPattern};
    use test_strategy::{proptest, Arbitrary};

    #[derive(Debug, Arbitrary)]
    struct PatternInput {
        #[strategy(1..=64u32)]
        width: u32,
        raw: u64,
    }

    impl PatternInput {
        fn pattern(&self) -> BitPattern {
            let width = BitWidth::try_from(self.width).unwrap();
            BitPattern::from_unsigned(self.raw & width.all_bits_mask(), width).unwrap()
        }
    }

    #[proptest]
    fn flip_complements_every_bit(input: PatternInput) {
        let p = input.pattern();
        let flipped = p.flip();
        assert_eq!(flipped.width(), p.width());
        for (before, after) in p.bits().zip(flipped.bits()) {
            assert_eq!(after, before.complement());
        }
        assert_eq!(flipped.flip(), p);
    }

    #[proptest]
    fn negate_is_an_involution_except_at_minimum(input: PatternInput) {
        let p = input.pattern();
        let min = BitPattern::min_signed(p.width());
        if p == min {
            assert_eq!(p.negate(), p);
        } else {
            assert_eq!(p.negate().negate(), p);
        }
    }

    #[proptest]
    fn negate_agrees_with_native_wrapping_negation(input: PatternInput) {
        let p = input.pattern();
        let expected = p.unsigned_value().wrapping_neg() & p.width().all_bits_mask();
        assert_eq!(p.negate().unsigned_value(), expected);
    }

    #[proptest]
    fn text_form_round_trips(input: PatternInput) {
        let p = input.pattern();
        let text = p.to_string();
        assert!(text.chars().all(|ch| ch == '0' || ch == '1'));
        assert_eq!(text.parse::<BitPattern>(), Ok(p));
        assert_eq!(p.msb() == Bit::One, p.to_signed() < 0);
    }
}
