//! Errors surfaced by the `scaffpack` binary.
//!
//! Every failure ends up as a [`CliError`], which knows its exit code, a few
//! hints for the user and how to print itself.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use scaffpack_core::error::ScaffError;

pub use scaffpack_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A flag or `--answer` value could not be used.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// The destination cannot hold a project.
    #[error("Invalid destination '{}': {reason}", path.display())]
    InvalidDestination { path: PathBuf, reason: String },

    /// A config file could not be read, parsed or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    #[error("Generation failed: {0}")]
    Core(#[source] ScaffError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user interrupted a prompt.
    #[error("Cancelled before any file was written")]
    Cancelled,

    /// Questions are needed but stdin is not a terminal.
    #[error("Cannot ask questions: stdin is not a terminal")]
    #[cfg_attr(not(feature = "interactive"), allow(dead_code))]
    NotInteractive,

    /// Prompting was compiled out.
    #[error("This build has no '{feature}' support")]
    #[cfg_attr(feature = "interactive", allow(dead_code))]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

/// A cancelled prompt becomes [`CliError::Cancelled`]; everything else is
/// wrapped.
impl From<ScaffError> for CliError {
    fn from(err: ScaffError) -> Self {
        if err.is_cancelled() {
            Self::Cancelled
        } else {
            Self::Core(err)
        }
    }
}

impl CliError {
    /// Hints printed under the error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec![
                format!("Valid answer keys: {}", scaffpack_core::domain::questions::KEYS.join(", ")),
                "Write answers as KEY=VALUE, e.g. -a langType=Typescript".into(),
            ],
            Self::InvalidDestination { path, .. } => vec![format!(
                "Pick a directory, or a path that does not exist yet, instead of '{}'",
                path.display()
            )],
            Self::ConfigError { .. } => vec![
                "Run 'scaffpack config path' to see which file was read".into(),
                "Run 'scaffpack init --force' to start from the defaults".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => {
                vec!["Check that the destination is writable".into()]
            }
            Self::Cancelled => vec!["Run the command again to start over".into()],
            Self::NotInteractive | Self::FeatureNotAvailable { .. } => vec![
                "Pass --force to accept every default".into(),
                "Pass --answer KEY=VALUE for each question you want to change".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. }
            | Self::InvalidDestination { .. }
            | Self::Cancelled
            | Self::NotInteractive => ErrorCategory::UserError,
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Cancelled => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
        }
    }

    /// Process exit code: 2 user, 3 not found, 4 configuration, 1 internal.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// The message block printed to stderr.
    ///
    /// `verbose` adds the source chain. `colorful` adds ANSI styling.
    pub fn render(&self, verbose: bool, colorful: bool) -> String {
        let paint = |text: &str, style: Paint| -> String {
            if !colorful {
                return text.to_owned();
            }
            match style {
                Paint::Error => text.red().bold().to_string(),
                Paint::Heading => text.yellow().bold().to_string(),
                Paint::Faint => text.dimmed().to_string(),
            }
        };

        let mut out = format!("\n{} {self}\n", paint("Error:", Paint::Error));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&paint(&format!("  Caused by: {err}\n"), Paint::Faint));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", paint("Suggestions:", Paint::Heading)));
            for hint in suggestions {
                out.push_str(&format!("  - {hint}\n"));
            }
        }

        if !verbose {
            out.push_str(&paint("\nRun with -v for the full cause.\n", Paint::Faint));
        }
        out
    }

    /// Record the failure in the log before it is printed.
    pub fn log(&self) {
        let exit_code = self.exit_code();
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(exit_code, error = %self, "command failed");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code, error = %self, "command failed");
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "underlying error");
        }
    }
}

#[derive(Clone, Copy)]
enum Paint {
    Error,
    Heading,
    Faint,
}

/// Coarse classification behind [`CliError::exit_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Attach a context message while turning a foreign error into a
/// [`CliError`].
///
/// I/O errors become [`CliError::IoError`]; `anyhow` errors, which only come
/// out of config loading, become [`CliError::ConfigError`].
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

impl<T> IntoCli<T> for anyhow::Result<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {e:#}", f().into()),
            source: Some(e.into()),
        })
    }
}
