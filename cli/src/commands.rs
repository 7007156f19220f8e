//! One function per subcommand.  Each writes its result to the
//! report writer; the bare results (without the explanation) are
//! suitable for use in scripts.

use std::io::Write;

use termcolor::WriteColor;
use tracing::{event, Level};

use complements::prelude::*;

use crate::report::ReportWriter;
use crate::Fail;

/// The widths shown by `range` when none are given.
pub(crate) const DEFAULT_RANGE_WIDTHS: [BitWidth; 3] = [BitWidth::W4, BitWidth::W8, BitWidth::W16];

pub(crate) fn write_encoding_steps<W: WriteColor>(
    out: &mut ReportWriter<W>,
    steps: &EncodingSteps,
) -> Result<(), Fail> {
    writeln!(out, "Decimal: {}", steps.value)?;
    writeln!(out, "Steps:")?;
    writeln!(
        out,
        "  1. Get positive binary: {} ({})",
        steps.magnitude,
        steps.magnitude.unsigned_value()
    )?;
    match steps.ones_complement {
        Some(ones) => {
            writeln!(out, "  2. One's complement:    {ones}")?;
            writeln!(out, "  3. Add 1 (Two's comp):  {}", steps.encoded)?;
        }
        None => {
            writeln!(out, "  2. Not negative, so this is already the encoding")?;
        }
    }
    Ok(())
}

pub(crate) fn write_range<W: WriteColor>(
    out: &mut ReportWriter<W>,
    width: BitWidth,
) -> Result<(), Fail> {
    let (min, max) = range_for_width(width);
    writeln!(out, "{}-bit: {min} to {max}", width.get())?;
    Ok(())
}

pub(crate) fn flip<W: WriteColor>(out: &mut ReportWriter<W>, bits: &str) -> Result<(), Fail> {
    let result = bit_flip(bits)?;
    event!(Level::DEBUG, input = bits, output = %result, "one's complement");
    writeln!(out, "{result}")?;
    Ok(())
}

pub(crate) fn twos_complement<W: WriteColor>(
    out: &mut ReportWriter<W>,
    bits: &str,
) -> Result<(), Fail> {
    let result = negate(bits)?;
    event!(Level::DEBUG, input = bits, output = %result, "two's complement");
    if result == bits {
        event!(
            Level::INFO,
            "{bits} is its own two's complement (zero or the minimum value)"
        );
    }
    writeln!(out, "{result}")?;
    Ok(())
}

pub(crate) fn encode<W: WriteColor>(
    out: &mut ReportWriter<W>,
    value: i64,
    width: BitWidth,
    show_steps: bool,
) -> Result<(), Fail> {
    let steps = explain_encoding(value, width)?;
    event!(Level::DEBUG, value, %width, encoded = %steps.encoded, "encoded");
    if show_steps {
        write_encoding_steps(out, &steps)?;
    } else {
        writeln!(out, "{}", steps.encoded)?;
    }
    Ok(())
}

pub(crate) fn decode<W: WriteColor>(
    out: &mut ReportWriter<W>,
    bits: &str,
    width: Option<BitWidth>,
) -> Result<(), Fail> {
    let value = match width {
        Some(w) => decode_signed_with_width(bits, w)?,
        None => decode_signed(bits)?,
    };
    event!(Level::DEBUG, input = bits, value, "decoded");
    writeln!(out, "{value}")?;
    Ok(())
}

pub(crate) fn ranges<W: WriteColor>(
    out: &mut ReportWriter<W>,
    widths: &[BitWidth],
) -> Result<(), Fail> {
    let widths: &[BitWidth] = if widths.is_empty() {
        &DEFAULT_RANGE_WIDTHS
    } else {
        widths
    };
    for width in widths {
        write_range(out, *width)?;
    }
    Ok(())
}
