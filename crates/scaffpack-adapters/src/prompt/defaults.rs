use scaffpack_core::{
    application::ports::Prompter,
    domain::{ConfirmQuestion, ListQuestion},
    error::ScaffResult,
};
use tracing::debug;

/// Answers every question with its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsPrompter;

impl DefaultsPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DefaultsPrompter {
    fn list(&self, question: &ListQuestion, _force: bool) -> ScaffResult<String> {
        debug!(key = question.key, answer = question.default, "default answer");
        Ok(question.default.to_string())
    }

    fn confirm(&self, question: &ConfirmQuestion, _force: bool) -> ScaffResult<bool> {
        debug!(key = question.key, answer = question.default, "default answer");
        Ok(question.default)
    }
}
