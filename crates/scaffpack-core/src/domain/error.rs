// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside `ScaffError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("'{value}' is not a valid choice for {key}")]
    InvalidChoice { key: &'static str, value: String },

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("Invalid package manifest: {0}")]
    InvalidManifest(String),

    #[error("Duplicate path in generation plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidChoice { key, value } => vec![
                format!("'{}' was given for {}", value, key),
                match *key {
                    "langType" => "  • Valid choices: none, ES6, Typescript".into(),
                    "cssType" => "  • Valid choices: none, CSS only, SASS, LESS, Stylus".into(),
                    _ => "  • Pick one of the offered choices".into(),
                },
            ],
            Self::InvalidManifest(msg) => vec![
                "The existing package.json could not be merged".into(),
                format!("Details: {}", msg),
                "Fix or remove package.json and run again".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' must be relative to the project root", path),
                "Check your custom templates".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidChoice { .. } | Self::InvalidAnswer(_) | Self::InvalidManifest(_) => {
                ErrorCategory::Validation
            }
            Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_choice_lists_css_choices() {
        let err = DomainError::InvalidChoice {
            key: "cssType",
            value: "tailwind".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("Stylus")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn manifest_error_is_validation() {
        let err = DomainError::InvalidManifest("not an object".into());
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("not an object"));
    }
}
