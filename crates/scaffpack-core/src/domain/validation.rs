use crate::domain::{
    answers::{AnswerRecord, CssConfig},
    error::DomainError,
    plan::GenerationPlan,
    value_objects::CssType,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Re-check the CSS invariants of a record built elsewhere.
    pub fn validate_answers(answers: &AnswerRecord) -> Result<(), DomainError> {
        match answers.css() {
            CssConfig::None => Ok(()),
            CssConfig::Configured {
                css_type,
                is_css,
                is_post_css,
                is_extract_plugin,
            } => {
                if css_type == CssType::None {
                    return Err(DomainError::InvalidAnswer(
                        "configured CSS cannot have cssType 'none'".into(),
                    ));
                }
                CssConfig::configured(css_type, is_css, is_post_css, is_extract_plugin).map(|_| ())
            }
        }
    }

    pub fn validate_plan(plan: &GenerationPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
