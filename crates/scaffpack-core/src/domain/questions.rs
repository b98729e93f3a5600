//! The question catalogue.
//!
//! Every prompt the flow can ask is built here so that keys, wording, choices
//! and defaults live in one place. Prompter adapters receive these values and
//! never invent their own defaults.

use std::borrow::Cow;

use crate::domain::value_objects::{CssType, LangType};

/// Every answer key, in asking order.
pub const KEYS: [&str; 7] = [
    "langType",
    "devServer",
    "htmlWebpackPlugin",
    "cssType",
    "isCSS",
    "isPostCSS",
    "isExtractPlugin",
];

/// A single-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuestion {
    pub key: &'static str,
    pub message: Cow<'static, str>,
    pub choices: Vec<&'static str>,
    pub default: &'static str,
}

impl ListQuestion {
    /// Index of the default within `choices`.
    pub fn default_index(&self) -> usize {
        self.choices
            .iter()
            .position(|c| *c == self.default)
            .unwrap_or(0)
    }

    /// Whether `answer` is one of the offered choices.
    pub fn offers(&self, answer: &str) -> bool {
        self.choices.contains(&answer)
    }
}

/// A yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmQuestion {
    pub key: &'static str,
    pub message: Cow<'static, str>,
    pub default: bool,
}

pub fn lang_type() -> ListQuestion {
    ListQuestion {
        key: "langType",
        message: "Which of the following JS solutions do you want to use?".into(),
        choices: LangType::ALL.iter().map(LangType::as_str).collect(),
        default: LangType::None.as_str(),
    }
}

pub fn dev_server() -> ConfirmQuestion {
    ConfirmQuestion {
        key: "devServer",
        message: "Do you want to use webpack-dev-server?".into(),
        default: true,
    }
}

pub fn html_webpack_plugin() -> ConfirmQuestion {
    ConfirmQuestion {
        key: "htmlWebpackPlugin",
        message: "Do you want to simplify the creation of HTML files for your bundle?".into(),
        default: true,
    }
}

pub fn css_type() -> ListQuestion {
    ListQuestion {
        key: "cssType",
        message: "Which of the following CSS solutions do you want to use?".into(),
        choices: CssType::ALL.iter().map(CssType::as_str).collect(),
        default: CssType::None.as_str(),
    }
}

/// Only asked for preprocessors; `CSS only` implies plain CSS.
pub fn is_css(css_type: CssType) -> ConfirmQuestion {
    ConfirmQuestion {
        key: "isCSS",
        message: format!("Will you be using CSS styles along with {css_type} in your project?")
            .into(),
        default: true,
    }
}

pub fn is_post_css(css_type: CssType) -> ConfirmQuestion {
    ConfirmQuestion {
        key: "isPostCSS",
        message: "Will you be using PostCSS in your project?".into(),
        default: css_type == CssType::CssOnly,
    }
}

pub fn is_extract_plugin() -> ConfirmQuestion {
    ConfirmQuestion {
        key: "isExtractPlugin",
        message: "Do you want to extract CSS for every file?".into(),
        default: true,
    }
}
