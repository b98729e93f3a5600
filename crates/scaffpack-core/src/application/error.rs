//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business rules.
//! Business rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The prompter could not produce an answer.
    #[error("Prompt '{key}' failed: {reason}")]
    PromptFailed { key: String, reason: String },

    /// The user aborted a prompt (Ctrl-C, closed stdin).
    #[error("Prompt '{key}' was cancelled")]
    PromptCancelled { key: String },

    /// No template source could provide the named template.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Template rendering failed.
    #[error("Template rendering failed for {name}: {reason}")]
    RenderingFailed { name: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PromptFailed { key, .. } => vec![
                format!("Could not read an answer for {}", key),
                "Run in a terminal, or use --force to accept every default".into(),
            ],
            Self::PromptCancelled { .. } => vec![
                "Generation was cancelled before any file was written".into(),
            ],
            Self::TemplateNotFound { name } => vec![
                format!("Template '{}' could not be loaded", name),
                "Check --template-dir or $SCAFFPACK_TEMPLATES_DIR".into(),
                "Remove the override to fall back to the built-in templates".into(),
            ],
            Self::RenderingFailed { name, .. } => vec![
                format!("Template '{}' has a syntax error", name),
                "Check your custom template against the built-in one".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the destination is a directory".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::PromptCancelled { .. } => ErrorCategory::Cancelled,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
