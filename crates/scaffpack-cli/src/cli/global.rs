//! Flags shared by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{ArgAction, Args};

/// Global arguments for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` every answer and file, `-vvv` trace.
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        long_help = "Log more detail to stderr.
    (none)  warnings and errors
    -v      generation progress
    -vv     every answer and every written file
    -vvv    tracing internals
RUST_LOG overrides this flag when set."
    )]
    pub verbose: u8,

    /// Only print errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print without ANSI colours (also honours `NO_COLOR`).
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from this TOML file instead of `.scaffpack.toml`.
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        env = "SCAFFPACK_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// How results are printed; `auto` uses the config file, then the terminal.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// How the CLI renders its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from config, else `human` on a terminal and `plain`
    /// when piped.
    #[default]
    Auto,
    /// Coloured summary with a spinner.
    Human,
    /// The same summary without colour or spinner.
    Plain,
    /// One JSON document describing the answers and files.
    Json,
}
