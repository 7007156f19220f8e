//! Demonstrates one's complement and two's complement fixed-width
//! binary representations.  With no subcommand, prints a series of
//! worked examples; the subcommands perform one operation each.
#![deny(unsafe_code)]

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

use clap::ArgAction::Set;
use clap::{Parser, Subcommand};
use tracing::{event, span, Level};
use tracing_subscriber::prelude::*;

use complements::prelude::*;

mod commands;
mod demo;
mod report;

use report::{ColourWhen, ReportWriter};

const ABOUT: &str = "Demonstrate one's and two's complement binary representations";

/// Demonstrate one's and two's complement binary representations
#[derive(Parser, Debug)]
#[clap(version, about = ABOUT, long_about = None)]
struct Cli {
    /// When to use colour in headings
    #[clap(long, value_enum, default_value_t = ColourWhen::Auto, global = true)]
    color: ColourWhen,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print the worked examples (this is the default)
    Demo,
    /// Print the one's complement (every bit inverted) of a bit pattern
    Flip {
        #[clap(action = Set)]
        bits: String,
    },
    /// Print the two's complement (one's complement plus one) of a
    /// bit pattern
    Negate {
        #[clap(action = Set)]
        bits: String,
    },
    /// Print the two's complement encoding of a signed integer
    Encode {
        #[clap(action = Set, allow_negative_numbers = true)]
        value: i64,
        /// Number of bits in the encoding
        #[clap(short, long, value_parser = parse_width, default_value = "8")]
        width: BitWidth,
        /// Also show the intermediate steps
        #[clap(long)]
        steps: bool,
    },
    /// Print the signed integer represented by a two's complement bit
    /// pattern
    Decode {
        #[clap(action = Set)]
        bits: String,
        /// Fail unless the pattern has exactly this many bits
        #[clap(short, long, value_parser = parse_width)]
        width: Option<BitWidth>,
    },
    /// Print the range of values representable in n-bit two's
    /// complement (by default for 4, 8 and 16 bits)
    Range {
        #[clap(value_parser = parse_width)]
        widths: Vec<BitWidth>,
    },
}

fn parse_width(s: &str) -> Result<BitWidth, String> {
    let n: u32 = s
        .parse()
        .map_err(|e| format!("'{s}' is not a number of bits: {e}"))?;
    BitWidth::try_from(n).map_err(|e| e.to_string())
}

#[derive(Debug)]
pub(crate) enum Fail {
    BadInput(BitPatternError),
    Io(io::Error),
    InitialisationFailure(String),
}

impl Display for Fail {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Fail::BadInput(e) => e.fmt(f),
            Fail::Io(e) => write!(f, "failed to write output: {e}"),
            Fail::InitialisationFailure(msg) => f.write_str(msg.as_str()),
        }
    }
}

impl Error for Fail {}

impl From<BitPatternError> for Fail {
    fn from(e: BitPatternError) -> Fail {
        Fail::BadInput(e)
    }
}

impl From<io::Error> for Fail {
    fn from(e: io::Error) -> Fail {
        Fail::Io(e)
    }
}

fn init_tracing() -> Result<(), Fail> {
    // See
    // https://docs.rs/tracing-subscriber/0.3/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.  Trace output goes to stderr so that it does not mix
    // with the report on stdout.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(io::stderr);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            return Err(Fail::InitialisationFailure(format!(
                "failed to initialise tracing filter (perhaps there is a problem with environment variables): {e}"
            )));
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<(), Fail> {
    let mut out = ReportWriter::stdout(cli.color);
    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            let span = span!(Level::INFO, "demo");
            let _enter = span.enter();
            demo::write_demonstration(&mut out)
        }
        Command::Flip { bits } => {
            let span = span!(Level::INFO, "flip", input = %bits);
            let _enter = span.enter();
            commands::flip(&mut out, &bits)
        }
        Command::Negate { bits } => {
            let span = span!(Level::INFO, "negate", input = %bits);
            let _enter = span.enter();
            commands::twos_complement(&mut out, &bits)
        }
        Command::Encode {
            value,
            width,
            steps,
        } => {
            let span = span!(Level::INFO, "encode", value, %width);
            let _enter = span.enter();
            commands::encode(&mut out, value, width, steps)
        }
        Command::Decode { bits, width } => {
            let span = span!(Level::INFO, "decode", input = %bits, width = ?width);
            let _enter = span.enter();
            commands::decode(&mut out, &bits, width)
        }
        Command::Range { widths } => {
            let span = span!(Level::INFO, "range");
            let _enter = span.enter();
            commands::ranges(&mut out, &widths)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let result = init_tracing().and_then(|()| run(cli));
    match result {
        Err(e) => {
            event!(Level::ERROR, "failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_demo() {
        let cli = Cli::try_parse_from(["complements-demo"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.color, ColourWhen::Auto);
    }

    #[test]
    fn test_encode_accepts_negative_values() {
        let cli =
            Cli::try_parse_from(["complements-demo", "encode", "-23", "--width", "16"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Encode {
                value: -23,
                width: BitWidth::W16,
                steps: false,
            })
        );
    }

    #[test]
    fn test_encode_default_width_is_eight() {
        let cli = Cli::try_parse_from(["complements-demo", "encode", "5", "--steps"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Encode {
                value: 5,
                width: BitWidth::W8,
                steps: true,
            })
        );
    }

    #[test]
    fn test_bad_widths_are_rejected() {
        assert!(Cli::try_parse_from(["complements-demo", "encode", "1", "-w", "0"]).is_err());
        assert!(Cli::try_parse_from(["complements-demo", "range", "65"]).is_err());
        assert!(Cli::try_parse_from(["complements-demo", "range", "eight"]).is_err());
    }

    #[test]
    fn test_range_widths() {
        let cli = Cli::try_parse_from(["complements-demo", "range", "4", "32"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Range {
                widths: vec![BitWidth::W4, BitWidth::W32],
            })
        );
    }

    #[test]
    fn test_parse_width_messages() {
        assert_eq!(parse_width("8"), Ok(BitWidth::W8));
        assert_eq!(
            parse_width("0"),
            Err("unsupported width of 0 bits (must be between 1 and 64)".to_string())
        );
    }

    #[test]
    fn test_fail_display() {
        let e = Fail::from(BitPatternError::UnsupportedWidth(0));
        assert_eq!(
            e.to_string(),
            "unsupported width of 0 bits (must be between 1 and 64)"
        );
    }
}
