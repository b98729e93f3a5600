//! Interactive terminal prompter backed by `dialoguer`.

use dialoguer::{Confirm, Select, theme::ColorfulTheme, theme::SimpleTheme, theme::Theme};
use scaffpack_core::{
    application::{ApplicationError, ports::Prompter},
    domain::{ConfirmQuestion, ListQuestion},
    error::{ScaffError, ScaffResult},
};
use tracing::debug;

/// Asks questions on stderr and reads answers from the terminal.
pub struct TerminalPrompter {
    colorful: bool,
}

impl TerminalPrompter {
    pub fn new(colorful: bool) -> Self {
        Self { colorful }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }
}

impl Prompter for TerminalPrompter {
    fn list(&self, question: &ListQuestion, force: bool) -> ScaffResult<String> {
        if force {
            return Ok(question.default.to_string());
        }

        let theme = self.theme();
        let index = Select::with_theme(theme.as_ref())
            .with_prompt(question.message.to_string())
            .items(question.choices.as_slice())
            .default(question.default_index())
            .interact()
            .map_err(|e| prompt_error(question.key, e))?;

        let answer = question
            .choices
            .get(index)
            .copied()
            .ok_or_else(|| ScaffError::Internal {
                message: format!("selection {index} out of range for {}", question.key),
            })?;
        debug!(key = question.key, answer, "answered");
        Ok(answer.to_string())
    }

    fn confirm(&self, question: &ConfirmQuestion, force: bool) -> ScaffResult<bool> {
        if force {
            return Ok(question.default);
        }

        let theme = self.theme();
        let answer = Confirm::with_theme(theme.as_ref())
            .with_prompt(question.message.to_string())
            .default(question.default)
            .interact()
            .map_err(|e| prompt_error(question.key, e))?;
        debug!(key = question.key, answer, "answered");
        Ok(answer)
    }
}

/// Ctrl-C is a cancellation; anything else is a prompt failure.
fn prompt_error(key: &str, err: dialoguer::Error) -> ScaffError {
    match err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            ApplicationError::PromptCancelled { key: key.into() }.into()
        }
        other => ApplicationError::PromptFailed {
            key: key.into(),
            reason: other.to_string(),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use scaffpack_core::domain::questions;

    use super::*;

    #[test]
    fn force_never_touches_the_terminal() {
        let prompter = TerminalPrompter::new(false);
        assert_eq!(
            prompter.list(&questions::css_type(), true).unwrap(),
            "none"
        );
        assert!(prompter.confirm(&questions::dev_server(), true).unwrap());
    }

    #[test]
    fn interrupt_is_cancellation() {
        let err = prompt_error(
            "langType",
            dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::Interrupted)),
        );
        assert!(err.is_cancelled());
    }

    #[test]
    fn other_io_errors_are_failures() {
        let err = prompt_error(
            "langType",
            dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::NotConnected)),
        );
        assert!(!err.is_cancelled());
        assert!(err.to_string().contains("langType"));
    }
}
