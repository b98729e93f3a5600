//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "scaffpack",
    bin_name = "scaffpack",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Interactive webpack project scaffolding",
    long_about = "Scaffpack asks a few questions about your JavaScript and CSS \
                  tooling, then writes a ready-to-build webpack project.",
    after_help = "EXAMPLES:\n\
        \x20 scaffpack new my-app\n\
        \x20 scaffpack new my-app --force\n\
        \x20 scaffpack new my-app -a langType=Typescript -a cssType=SASS\n\
        \x20 scaffpack completions bash > /usr/share/bash-completion/completions/scaffpack",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a webpack project.
    #[command(
        visible_alias = "n",
        about = "Generate a webpack project",
        after_help = "EXAMPLES:\n\
            \x20 scaffpack new                 # answer questions, write into .\n\
            \x20 scaffpack new my-app --force  # accept every default\n\
            \x20 scaffpack new my-app --dry-run\n\
            \x20 scaffpack new my-app -a langType=ES6 -a devServer=false"
    )]
    New(NewArgs),

    /// Initialise a Scaffpack configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 scaffpack init           # default location\n\
            \x20 scaffpack init --global  # global config\n\
            \x20 scaffpack init --local   # .scaffpack.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 scaffpack completions bash > ~/.local/share/bash-completion/completions/scaffpack\n\
            \x20 scaffpack completions zsh  > ~/.zfunc/_scaffpack\n\
            \x20 scaffpack completions fish > ~/.config/fish/completions/scaffpack.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Scaffpack configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 scaffpack config get templates.local_path\n\
            \x20 scaffpack config list\n\
            \x20 scaffpack config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `scaffpack new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Destination directory; created if missing.
    #[arg(
        value_name = "DIR",
        default_value = ".",
        help = "Destination directory"
    )]
    pub dir: PathBuf,

    /// Answer every question with its default.
    #[arg(
        short = 'f',
        long = "force",
        help = "Skip all questions and use the defaults"
    )]
    pub force: bool,

    /// Show the answers and planned files without writing anything.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,

    /// Directory whose files override the built-in templates.
    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "Directory with template overrides"
    )]
    pub template_dir: Option<PathBuf>,

    /// Pre-answer a question, e.g. `langType=Typescript`.
    #[arg(
        short = 'a',
        long = "answer",
        value_name = "KEY=VALUE",
        help = "Pre-answer a question (repeatable)"
    )]
    pub answers: Vec<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `scaffpack init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(
        long = "global",
        conflicts_with = "local",
        help = "Create global configuration"
    )]
    pub global: bool,

    /// Write to `.scaffpack.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `scaffpack completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `scaffpack config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn new_defaults_to_current_directory() {
        let cli = Cli::parse_from(["scaffpack", "new"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.dir, PathBuf::from("."));
                assert!(!args.force);
                assert!(args.answers.is_empty());
            }
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn new_alias_and_flags() {
        let cli = Cli::parse_from([
            "scaffpack",
            "n",
            "site",
            "-f",
            "--dry-run",
            "-a",
            "langType=ES6",
            "--answer",
            "cssType=LESS",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.dir, PathBuf::from("site"));
        assert!(args.force && args.dry_run);
        assert_eq!(args.answers, vec!["langType=ES6", "cssType=LESS"]);
    }

    #[test]
    fn init_global_and_local_conflict() {
        assert!(Cli::try_parse_from(["scaffpack", "init", "--global", "--local"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["scaffpack", "--quiet", "--verbose", "new"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["scaffpack", "new", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }
}
