//! Everything the CLI prints to stdout goes through [`OutputManager`].

use std::io::{self, IsTerminal};
use std::time::Duration;

use clap::ValueEnum;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins; `auto` defers to the config file.
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
        } else {
            args.output_format
        };

        // Still auto: a terminal gets colour, a pipe gets plain text.
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Plain line; dropped in quiet and JSON mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(msg.to_owned())
    }

    /// `✓ msg` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2713}', Tone::Good, msg)
    }

    /// `⚠ msg` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status('\u{26a0}', Tone::Warn, msg)
    }

    /// `ℹ msg` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2139}', Tone::Note, msg)
    }

    /// Section title, e.g. "Files".
    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.emit(line)
    }

    /// Secondary line such as one row of the file listing.
    pub fn detail(&self, text: &str) -> io::Result<()> {
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.dimmed().to_string()
        };
        self.emit(line)
    }

    fn status(&self, symbol: char, tone: Tone, msg: &str) -> io::Result<()> {
        let line = match (self.no_color, tone) {
            (true, _) => format!("{symbol} {msg}"),
            (false, Tone::Good) => format!("{} {}", symbol.green().bold(), msg.green()),
            (false, Tone::Warn) => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            (false, Tone::Note) => format!("{} {}", symbol.blue().bold(), msg.blue()),
        };
        self.emit(line)
    }

    fn emit(&self, line: String) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.term.write_line(&line)
    }

    /// Pretty JSON document on stdout.  Only emitted in JSON mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        if self.resolved_format != OutputFormat::Json {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Spinner on stderr while `msg` is in progress.
    ///
    /// Hidden unless the output is human-readable and stderr is a terminal,
    /// so it never interleaves with piped output.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.silent()
            || self.resolved_format != OutputFormat::Human
            || !io::stderr().is_terminal()
        {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_owned());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// Never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    /// Human-facing lines are dropped in quiet mode and when emitting JSON.
    fn silent(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Good,
    Warn,
    Note,
}

// ── tests ─────────────────────────────────────────────────────────────────────
