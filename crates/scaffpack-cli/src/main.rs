//! `scaffpack`: ask the webpack questions, then write the project.
//!
//! `main` loads `.env`, parses flags, loads [`AppConfig`] (before logging, so
//! `logging.file` can take effect), installs the subscriber and hands off to
//! a command. Any [`CliError`] is printed once here and turned into the exit
//! code: 1 internal, 2 user error, 3 not found, 4 configuration.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
#[cfg(feature = "interactive")]
mod prompt;

fn main() -> ExitCode {
    // Optional; SCAFFPACK_* settings may live there.
    let _ = dotenvy::dotenv();

    // --help and --version arrive as errors that print to stdout.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if !e.use_stderr() {
                // --help / --version
                let _ = e.print();
                return ExitCode::SUCCESS;
            }
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };
    let verbose = cli.global.verbose > 0;
    let colorful = !cli.global.no_color && std::io::stderr().is_terminal();

    let config = match AppConfig::load(cli.global.config.as_deref())
        .with_cli_context(|| "Failed to load configuration")
    {
        Ok(cfg) => cfg,
        Err(e) => return report_error(e, verbose, colorful),
    };

    let _log_guard = match init_logging(&cli.global, config.logging.file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        config_sources = ?config.sources,
        "CLI started"
    );

    let output = OutputManager::new(&cli.global, &config);
    let colorful = colorful && !config.output.no_color;

    match run(cli, config, output) {
        Ok(()) => {
            info!("Scaffpack completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            e.log();
            report_error(e, verbose, colorful)
        }
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(cmd) => commands::new::execute(cmd, cli.global, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Errors always go to stderr, whatever `--output-format` says.
fn report_error(err: CliError, verbose: bool, colorful: bool) -> ExitCode {
    eprint!("{}", err.render(verbose, colorful));
    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
