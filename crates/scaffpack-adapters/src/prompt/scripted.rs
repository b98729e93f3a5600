//! Pre-recorded answers keyed by question key.

use std::collections::HashMap;

use scaffpack_core::{
    application::ports::Prompter,
    domain::{ConfirmQuestion, CssType, DomainError, LangType, ListQuestion, questions},
    error::ScaffResult,
};
use tracing::debug;

/// Serves recorded answers and delegates everything else.
///
/// With `force` set the recorded answers are ignored and the fallback is
/// asked, so defaults still win.
pub struct ScriptedPrompter {
    answers: HashMap<&'static str, String>,
    fallback: Box<dyn Prompter>,
}

impl ScriptedPrompter {
    pub fn new(fallback: Box<dyn Prompter>) -> Self {
        Self {
            answers: HashMap::new(),
            fallback,
        }
    }

    /// Record an answer. Unknown keys are rejected.
    pub fn answer(mut self, key: &str, value: impl Into<String>) -> Result<Self, DomainError> {
        let key = questions::KEYS
            .into_iter()
            .find(|k| *k == key)
            .ok_or_else(|| DomainError::InvalidAnswer(format!("unknown question key '{key}'")))?;
        self.answers.insert(key, value.into());
        Ok(self)
    }

    /// Record answers given as `key=value` strings.
    pub fn with_pairs<I, S>(self, pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pairs.into_iter().try_fold(self, |prompter, pair| {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                DomainError::InvalidAnswer(format!("expected KEY=VALUE, got '{pair}'"))
            })?;
            prompter.answer(key.trim(), value.trim())
        })
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn list(&self, question: &ListQuestion, force: bool) -> ScaffResult<String> {
        match self.answers.get(question.key).filter(|_| !force) {
            Some(answer) => {
                debug!(key = question.key, %answer, "scripted answer");
                Ok(normalize_choice(question, answer))
            }
            None => self.fallback.list(question, force),
        }
    }

    fn confirm(&self, question: &ConfirmQuestion, force: bool) -> ScaffResult<bool> {
        match self.answers.get(question.key).filter(|_| !force) {
            Some(answer) => {
                debug!(key = question.key, %answer, "scripted answer");
                Ok(parse_bool(question.key, answer)?)
            }
            None => self.fallback.confirm(question, force),
        }
    }
}

/// Map an alias such as `ts` or `scss` onto the offered label.
///
/// Anything unrecognised is returned unchanged so the flow can reject it.
fn normalize_choice(question: &ListQuestion, answer: &str) -> String {
    if question.offers(answer) {
        return answer.to_string();
    }
    let label = match question.key {
        "langType" => answer.parse::<LangType>().map(|v| v.to_string()).ok(),
        "cssType" => answer.parse::<CssType>().map(|v| v.to_string()).ok(),
        _ => None,
    };
    label.unwrap_or_else(|| answer.to_string())
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, DomainError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(DomainError::InvalidChoice {
            key,
            value: value.to_string(),
        }),
    }
}
