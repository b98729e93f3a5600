//! The error every core operation returns.
//!
//! [`ScaffError`] folds the domain and application errors together so that
//! callers match one type, and classifies them with [`ErrorCategory`].

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

#[derive(Debug, Error, Clone)]
pub enum ScaffError {
    /// An answer, manifest or plan broke a rule.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// A port failed while the flow or the materializer was running.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// The environment is set up wrong, e.g. a missing template directory.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A broken invariant inside scaffpack itself.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type ScaffResult<T> = Result<T, ScaffError>;

impl ScaffError {
    /// Hints shown to the user under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { .. } => vec![
                "Check the template directory and config file scaffpack was given".into(),
            ],
            Self::Internal { .. } => vec![
                "This is a bug in scaffpack".into(),
                "Please report this issue with the output of `scaffpack -vv`".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category().into(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether the user aborted a prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::PromptCancelled { .. }))
    }
}

/// What kind of failure this was, independent of where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Cancelled,
    Internal,
}

impl From<crate::domain::ErrorCategory> for ErrorCategory {
    fn from(category: crate::domain::ErrorCategory) -> Self {
        match category {
            crate::domain::ErrorCategory::Validation => Self::Validation,
            crate::domain::ErrorCategory::Internal => Self::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_validation_maps_to_validation() {
        let err: ScaffError = DomainError::InvalidManifest("x".into()).into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn missing_template_is_not_found() {
        let err: ScaffError = ApplicationError::TemplateNotFound {
            name: "index.js".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.is_cancelled());
    }

    #[test]
    fn cancelled_prompt_is_detected() {
        let err: ScaffError = ApplicationError::PromptCancelled {
            key: "cssType".into(),
        }
        .into();
        assert!(err.is_cancelled());
        assert_eq!(err.category(), ErrorCategory::Cancelled);
    }

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err: ScaffError = DomainError::InvalidChoice {
            key: "langType",
            value: "CoffeeScript".into(),
        }
        .into();
        assert!(err.to_string().contains("CoffeeScript"));
    }
}
