//! The `AnswerRecord` and its typestate builder.
//!
//! An `AnswerRecord` is the frozen set of choices produced by the question
//! flow. The CSS half is a tagged union: choosing `none` yields
//! [`CssConfig::None`], which carries no flags at all, so the
//! "no CSS means every CSS flag is false" rule cannot be broken.
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`CssPending` / `CssAnswered`) so
//! that `build()` only exists once the CSS answers are in. Each key can be
//! committed once; a second commit is rejected.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer};

use crate::domain::{
    error::DomainError,
    value_objects::{CssType, LangType},
};

// ── CSS configuration ─────────────────────────────────────────────────────────

/// The CSS answers, or their absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CssConfig {
    /// `cssType = none`: no loaders, no PostCSS, no extraction.
    #[default]
    None,
    /// Any other `cssType`.
    Configured {
        css_type: CssType,
        is_css: bool,
        is_post_css: bool,
        is_extract_plugin: bool,
    },
}

impl CssConfig {
    /// Validated constructor for the configured branch.
    ///
    /// `css_type` must not be `none`, and `CSS only` always implies `is_css`.
    pub fn configured(
        css_type: CssType,
        is_css: bool,
        is_post_css: bool,
        is_extract_plugin: bool,
    ) -> Result<Self, DomainError> {
        if css_type == CssType::None {
            return Err(DomainError::InvalidAnswer(
                "cssType 'none' cannot carry CSS options".into(),
            ));
        }
        if css_type == CssType::CssOnly && !is_css {
            return Err(DomainError::InvalidAnswer(
                "cssType 'CSS only' requires isCSS".into(),
            ));
        }
        Ok(Self::Configured {
            css_type,
            is_css,
            is_post_css,
            is_extract_plugin,
        })
    }

    pub const fn css_type(&self) -> CssType {
        match self {
            Self::None => CssType::None,
            Self::Configured { css_type, .. } => *css_type,
        }
    }

    pub const fn is_css(&self) -> bool {
        matches!(self, Self::Configured { is_css: true, .. })
    }

    pub const fn is_post_css(&self) -> bool {
        matches!(
            self,
            Self::Configured {
                is_post_css: true,
                ..
            }
        )
    }

    pub const fn is_extract_plugin(&self) -> bool {
        matches!(
            self,
            Self::Configured {
                is_extract_plugin: true,
                ..
            }
        )
    }
}

// ── Answer record ─────────────────────────────────────────────────────────────

/// Finalized set of user choices driving generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnswerRecord {
    lang_type: LangType,
    dev_server: bool,
    html_webpack_plugin: bool,
    css: CssConfig,
}

impl AnswerRecord {
    /// Start building a new record.
    pub fn builder() -> AnswerRecordBuilder<CssPending> {
        AnswerRecordBuilder::new()
    }

    pub const fn lang_type(&self) -> LangType {
        self.lang_type
    }
    pub const fn dev_server(&self) -> bool {
        self.dev_server
    }
    pub const fn html_webpack_plugin(&self) -> bool {
        self.html_webpack_plugin
    }
    pub const fn css(&self) -> CssConfig {
        self.css
    }
    pub const fn css_type(&self) -> CssType {
        self.css.css_type()
    }
    pub const fn is_css(&self) -> bool {
        self.css.is_css()
    }
    pub const fn is_post_css(&self) -> bool {
        self.css.is_post_css()
    }
    pub const fn is_extract_plugin(&self) -> bool {
        self.css.is_extract_plugin()
    }

    /// Flat key/value view using the question keys.
    pub fn to_flat(&self) -> FlatAnswers {
        FlatAnswers {
            lang_type: self.lang_type,
            dev_server: self.dev_server,
            html_webpack_plugin: self.html_webpack_plugin,
            css_type: self.css_type(),
            is_css: self.is_css(),
            is_post_css: self.is_post_css(),
            is_extract_plugin: self.is_extract_plugin(),
        }
    }
}

impl Serialize for AnswerRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_flat().serialize(serializer)
    }
}

impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lang_type)?;
        if self.dev_server {
            f.write_str(" + dev-server")?;
        }
        if self.html_webpack_plugin {
            f.write_str(" + html")?;
        }
        if let CssConfig::Configured { css_type, .. } = self.css {
            write!(f, " + {css_type}")?;
        }
        Ok(())
    }
}

/// The record keyed by question key, used as template variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatAnswers {
    pub lang_type: LangType,
    pub dev_server: bool,
    pub html_webpack_plugin: bool,
    pub css_type: CssType,
    #[serde(rename = "isCSS")]
    pub is_css: bool,
    #[serde(rename = "isPostCSS")]
    pub is_post_css: bool,
    pub is_extract_plugin: bool,
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: CSS answers not yet committed.
pub struct CssPending;
/// Marker: CSS answers committed; the record can be built.
pub struct CssAnswered;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`AnswerRecord`].
pub struct AnswerRecordBuilder<S> {
    lang_type: Option<LangType>,
    dev_server: Option<bool>,
    html_webpack_plugin: Option<bool>,
    css: Option<CssConfig>,
    _marker: PhantomData<S>,
}

impl AnswerRecordBuilder<CssPending> {
    pub fn new() -> Self {
        Self {
            lang_type: None,
            dev_server: None,
            html_webpack_plugin: None,
            css: None,
            _marker: PhantomData,
        }
    }

    /// Commit the first three answers at once.
    pub fn base(
        self,
        lang_type: LangType,
        dev_server: bool,
        html_webpack_plugin: bool,
    ) -> Result<Self, DomainError> {
        self.lang_type(lang_type)?
            .dev_server(dev_server)?
            .html_webpack_plugin(html_webpack_plugin)
    }

    pub fn lang_type(mut self, lang_type: LangType) -> Result<Self, DomainError> {
        set_once(&mut self.lang_type, lang_type, "langType")?;
        Ok(self)
    }

    pub fn dev_server(mut self, dev_server: bool) -> Result<Self, DomainError> {
        set_once(&mut self.dev_server, dev_server, "devServer")?;
        Ok(self)
    }

    pub fn html_webpack_plugin(mut self, enabled: bool) -> Result<Self, DomainError> {
        set_once(&mut self.html_webpack_plugin, enabled, "htmlWebpackPlugin")?;
        Ok(self)
    }

    /// Commit the CSS answers. Transitions the builder to `CssAnswered`.
    pub fn css(self, css: CssConfig) -> AnswerRecordBuilder<CssAnswered> {
        AnswerRecordBuilder {
            lang_type: self.lang_type,
            dev_server: self.dev_server,
            html_webpack_plugin: self.html_webpack_plugin,
            css: Some(css),
            _marker: PhantomData,
        }
    }
}

impl Default for AnswerRecordBuilder<CssPending> {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerRecordBuilder<CssAnswered> {
    /// Freeze the record.
    pub fn build(self) -> Result<AnswerRecord, DomainError> {
        Ok(AnswerRecord {
            lang_type: self
                .lang_type
                .ok_or(DomainError::MissingRequiredField { field: "langType" })?,
            dev_server: self
                .dev_server
                .ok_or(DomainError::MissingRequiredField { field: "devServer" })?,
            html_webpack_plugin: self.html_webpack_plugin.ok_or(
                DomainError::MissingRequiredField {
                    field: "htmlWebpackPlugin",
                },
            )?,
            css: self
                .css
                .ok_or(DomainError::MissingRequiredField { field: "cssType" })?,
        })
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &'static str) -> Result<(), DomainError> {
    if slot.is_some() {
        return Err(DomainError::InvalidAnswer(format!(
            "{key} has already been answered"
        )));
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(css: CssConfig) -> AnswerRecord {
        AnswerRecord::builder()
            .base(LangType::TypeScript, true, false)
            .unwrap()
            .css(css)
            .build()
            .unwrap()
    }

    #[test]
    fn none_css_flattens_to_false_flags() {
        let answers = record(CssConfig::None);
        assert_eq!(answers.css_type(), CssType::None);
        assert!(!answers.is_css());
        assert!(!answers.is_post_css());
        assert!(!answers.is_extract_plugin());
    }

    #[test]
    fn configured_css_exposes_flags() {
        let answers = record(CssConfig::configured(CssType::Sass, true, false, true).unwrap());
        assert_eq!(answers.css_type(), CssType::Sass);
        assert!(answers.is_css());
        assert!(!answers.is_post_css());
        assert!(answers.is_extract_plugin());
    }

    #[test]
    fn configured_rejects_none_css_type() {
        assert!(CssConfig::configured(CssType::None, false, false, false).is_err());
    }

    #[test]
    fn css_only_requires_is_css() {
        assert!(CssConfig::configured(CssType::CssOnly, false, true, true).is_err());
        assert!(CssConfig::configured(CssType::CssOnly, true, true, true).is_ok());
    }

    #[test]
    fn keys_cannot_be_answered_twice() {
        let result = AnswerRecord::builder()
            .lang_type(LangType::Es6)
            .unwrap()
            .lang_type(LangType::TypeScript);
        assert!(matches!(result, Err(DomainError::InvalidAnswer(_))));
    }

    #[test]
    fn build_requires_base_answers() {
        let result = AnswerRecord::builder().css(CssConfig::None).build();
        assert_eq!(
            result.unwrap_err(),
            DomainError::MissingRequiredField { field: "langType" }
        );
    }

    #[test]
    fn serializes_with_question_keys() {
        let answers = record(CssConfig::configured(CssType::CssOnly, true, true, false).unwrap());
        let value = serde_json::to_value(answers).unwrap();

        assert_eq!(value["langType"], "Typescript");
        assert_eq!(value["devServer"], true);
        assert_eq!(value["htmlWebpackPlugin"], false);
        assert_eq!(value["cssType"], "CSS only");
        assert_eq!(value["isCSS"], true);
        assert_eq!(value["isPostCSS"], true);
        assert_eq!(value["isExtractPlugin"], false);
    }

    #[test]
    fn display_summarises_choices() {
        let answers = record(CssConfig::configured(CssType::Less, true, false, false).unwrap());
        assert_eq!(answers.to_string(), "Typescript + dev-server + LESS");
    }
}
