use std::fmt;
use std::io::{self, stdout, IsTerminal, Write};

use clap::ValueEnum;
use termcolor::{self, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{event, Level};

/// Width of the horizontal rules around the demonstration.
const RULE_WIDTH: usize = 60;

/// When to colour headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColourWhen {
    /// Only when standard output is a terminal
    Auto,
    Always,
    Never,
}

pub fn get_colour_choice(when: ColourWhen) -> ColorChoice {
    match when {
        ColourWhen::Auto if stdout().is_terminal() => ColorChoice::Auto,
        ColourWhen::Auto | ColourWhen::Never => ColorChoice::Never,
        ColourWhen::Always => ColorChoice::Always,
    }
}

/// Writes report text, with headings picked out in colour when the
/// underlying stream supports it.
pub struct ReportWriter<W: WriteColor> {
    stream: W,
}

impl ReportWriter<StandardStream> {
    pub fn stdout(when: ColourWhen) -> ReportWriter<StandardStream> {
        ReportWriter::new(StandardStream::stdout(get_colour_choice(when)))
    }
}

impl<W: WriteColor> ReportWriter<W> {
    pub fn new(stream: W) -> ReportWriter<W> {
        ReportWriter { stream }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.stream
    }

    fn set_colour(&mut self, spec: &ColorSpec) {
        if let Err(e) = self.stream.set_color(spec) {
            event!(Level::ERROR, "Failed to select colour {:?}: {}", spec, e);
        }
    }

    fn reset_colour(&mut self) {
        if let Err(e) = self.stream.reset() {
            event!(Level::ERROR, "Failed to reset colour: {}", e);
        }
    }

    fn coloured_line(&mut self, spec: &ColorSpec, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.set_colour(spec);
        let result = self.stream.write_fmt(args);
        self.reset_colour();
        result?;
        writeln!(self.stream)
    }

    pub fn rule(&mut self) -> io::Result<()> {
        writeln!(self.stream, "{}", "=".repeat(RULE_WIDTH))
    }

    /// The banner at the top of a report.
    pub fn title(&mut self, text: &str) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        self.coloured_line(&spec, format_args!("{text}"))
    }

    /// A section heading, preceded by a blank line.
    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stream)?;
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(termcolor::Color::Cyan)).set_bold(true);
        self.coloured_line(&spec, format_args!("--- {text} ---"))
    }
}

impl<W: WriteColor> Write for ReportWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}
