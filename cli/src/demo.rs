//! The worked examples printed when the program is run without a
//! subcommand.

use std::io::Write;

use termcolor::WriteColor;
use tracing::{event, Level};

use complements::prelude::*;

use crate::commands::{write_encoding_steps, write_range, DEFAULT_RANGE_WIDTHS};
use crate::report::ReportWriter;
use crate::Fail;

/// The values tabulated in the last example.
const COMMON_VALUES: [i64; 7] = [0, 1, -1, 127, -128, 5, -5];

pub(crate) fn write_demonstration<W: WriteColor>(out: &mut ReportWriter<W>) -> Result<(), Fail> {
    out.rule()?;
    out.title("COMPLEMENTS: One's and Two's Complement")?;
    out.rule()?;
    ones_complement_example(out)?;
    twos_complement_example(out)?;
    negative_number_example(out)?;
    sign_bit_example(out)?;
    range_example(out)?;
    common_values_example(out)?;
    key_concepts(out)?;
    event!(Level::DEBUG, "demonstration complete");
    Ok(())
}

fn ones_complement_example<W: WriteColor>(out: &mut ReportWriter<W>) -> Result<(), Fail> {
    out.heading("Example 1: One's Complement")?;
    let original = "10110011";
    let ones = bit_flip(original)?;
    writeln!(out, "Original:         {original}")?;
    writeln!(out, "One's complement: {ones}")?;
    writeln!(out, "(Flip all bits: 0→1, 1→0)")?;
    Ok(())
}

fn twos_complement_example<W: WriteColor>(out: &mut ReportWriter<W>) -> Result<(), Fail> {
    out.heading("Example 2: Two's Complement")?;
    let original = "01011100";
    let ones = bit_flip(original)?;
    let twos = negate(original)?;
    writeln!(out, "Original:         {original}")?;
    writeln!(out, "One's complement: {ones}")?;
    writeln!(out, "Add 1:            {twos}")?;
    writeln!(out, "(Two's complement = One's complement + 1)")?;
    Ok(())
}

fn negative_number_example<W: WriteColor>(out: &mut ReportWriter<W>) -> Result<(), Fail> {
    out.heading("Example 3: Negative Number Representation")?;
    let steps = explain_encoding(-23, BitWidth::W8)?;
    write_encoding_steps(out, &steps)?;
    let encoded = steps.encoded.to_string();
    let back = decode_signed(&encoded)?;
    writeln!(out, "Verification: {encoded} → {back}")?;
    Ok(())
}

fn sign_bit_example<W: WriteColor>(out: &mut ReportWriter<W>) -> Result<(), Fail> {
    out.heading("Example 4: MSB (Most Significant Bit)")?;
    for (n, text) in ["01100100", "11100100"].into_iter().enumerate() {
        let pattern: BitPattern = text.parse()?;
        let (label, sign) = if pattern.is_negative() {
            ("Negative number", "Negative")
        } else {
            ("Positive number", "Positive")
        };
        if n > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{label}: {pattern}")?;
        writeln!(out, "  MSB = {} → {sign}", pattern.msb().as_char())?;
        writeln!(out, "  Value: {}", pattern.to_signed())?;
    }
    Ok(())
}

fn range_example<W: WriteColor>(out: &mut ReportWriter<W>) -> Result<(), Fail> {
    out.heading("Example 5: Range for n-bit Two's Complement")?;
    for width in DEFAULT_RANGE_WIDTHS {
        write_range(out, width)?;
    }
    Ok(())
}

fn common_values_example<W: WriteColor>(out: &mut ReportWriter<W>) -> Result<(), Fail> {
    out.heading("Example 6: Common 8-bit Values")?;
    writeln!(out, "Decimal | 8-bit Two's Complement")?;
    writeln!(out, "--------|------------------------")?;
    for value in COMMON_VALUES {
        let encoded = encode_signed(value, BitWidth::W8)?;
        writeln!(out, " {value:4}   | {encoded}")?;
    }
    Ok(())
}

fn key_concepts<W: WriteColor>(out: &mut ReportWriter<W>) -> Result<(), Fail> {
    writeln!(out)?;
    out.rule()?;
    out.title("Key Concepts:")?;
    writeln!(out, "- One's complement: Flip all bits")?;
    writeln!(out, "- Two's complement: One's complement + 1")?;
    writeln!(out, "- MSB = 0 → positive, MSB = 1 → negative")?;
    writeln!(out, "- Two's complement is standard for negative numbers")?;
    writeln!(out, "- Range: -(2^(n-1)) to 2^(n-1) - 1")?;
    out.rule()?;
    Ok(())
}
