//! Domain value objects: LangType and CssType.
//!
//! # Design
//!
//! These are `Copy` value types compared by value.
//! The `as_str` form of each variant is the exact choice label shown to the
//! user and the exact string substituted into templates, so it must never
//! change independently of the question catalogue in `questions.rs`.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm, the `ALL` entry and the `FromStr` arm here
//! 3. Add its dependency names in `services::question_flow`
//! 4. The question catalogue picks it up from `ALL`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── LangType ─────────────────────────────────────────────────────────────────

/// JS language solution for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LangType {
    /// Plain JavaScript, no transpiler.
    #[default]
    #[serde(rename = "none")]
    None,
    /// Babel with `@babel/preset-env`.
    #[serde(rename = "ES6")]
    Es6,
    /// TypeScript through `ts-loader`.
    #[serde(rename = "Typescript")]
    TypeScript,
}

impl LangType {
    /// Every variant in the order the choices are offered.
    pub const ALL: [LangType; 3] = [Self::None, Self::Es6, Self::TypeScript];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Es6 => "ES6",
            Self::TypeScript => "Typescript",
        }
    }

    /// Extension of the generated entry file.
    pub const fn entry_extension(&self) -> &'static str {
        match self {
            Self::TypeScript => "ts",
            Self::None | Self::Es6 => "js",
        }
    }

    /// Entry path as written into `webpack.config.js`.
    pub fn entry_path(&self) -> String {
        format!("./src/index.{}", self.entry_extension())
    }
}

impl fmt::Display for LangType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LangType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "js" | "javascript" => Ok(Self::None),
            "es6" | "babel" => Ok(Self::Es6),
            "typescript" | "ts" => Ok(Self::TypeScript),
            other => Err(DomainError::InvalidChoice {
                key: "langType",
                value: other.to_string(),
            }),
        }
    }
}

// ── CssType ──────────────────────────────────────────────────────────────────

/// CSS solution for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CssType {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "CSS only")]
    CssOnly,
    #[serde(rename = "SASS")]
    Sass,
    #[serde(rename = "LESS")]
    Less,
    #[serde(rename = "Stylus")]
    Stylus,
}

impl CssType {
    /// Every variant in the order the choices are offered.
    pub const ALL: [CssType; 5] = [
        Self::None,
        Self::CssOnly,
        Self::Sass,
        Self::Less,
        Self::Stylus,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::CssOnly => "CSS only",
            Self::Sass => "SASS",
            Self::Less => "LESS",
            Self::Stylus => "Stylus",
        }
    }

    /// Whether this is a preprocessor on top of plain CSS.
    pub const fn is_preprocessor(&self) -> bool {
        matches!(self, Self::Sass | Self::Less | Self::Stylus)
    }
}

impl fmt::Display for CssType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CssType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "css only" | "css" | "css-only" => Ok(Self::CssOnly),
            "sass" | "scss" => Ok(Self::Sass),
            "less" => Ok(Self::Less),
            "stylus" | "styl" => Ok(Self::Stylus),
            other => Err(DomainError::InvalidChoice {
                key: "cssType",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_type_parses_labels_and_aliases() {
        assert_eq!(LangType::from_str("none").unwrap(), LangType::None);
        assert_eq!(LangType::from_str("ES6").unwrap(), LangType::Es6);
        assert_eq!(LangType::from_str("Typescript").unwrap(), LangType::TypeScript);
        assert_eq!(LangType::from_str("ts").unwrap(), LangType::TypeScript);
        assert!(LangType::from_str("coffeescript").is_err());
    }

    #[test]
    fn lang_type_labels_round_trip() {
        for lang in LangType::ALL {
            assert_eq!(LangType::from_str(lang.as_str()).unwrap(), lang);
        }
    }

    #[test]
    fn entry_path_follows_language() {
        assert_eq!(LangType::TypeScript.entry_path(), "./src/index.ts");
        assert_eq!(LangType::Es6.entry_path(), "./src/index.js");
        assert_eq!(LangType::None.entry_path(), "./src/index.js");
    }

    #[test]
    fn css_type_parses_labels_and_aliases() {
        assert_eq!(CssType::from_str("CSS only").unwrap(), CssType::CssOnly);
        assert_eq!(CssType::from_str("scss").unwrap(), CssType::Sass);
        assert_eq!(CssType::from_str("LESS").unwrap(), CssType::Less);
        assert!(matches!(
            CssType::from_str("tailwind"),
            Err(DomainError::InvalidChoice { key: "cssType", .. })
        ));
    }

    #[test]
    fn css_type_serializes_to_choice_label() {
        let json = serde_json::to_string(&CssType::CssOnly).unwrap();
        assert_eq!(json, "\"CSS only\"");
    }

    #[test]
    fn preprocessors() {
        assert!(CssType::Sass.is_preprocessor());
        assert!(!CssType::CssOnly.is_preprocessor());
        assert!(!CssType::None.is_preprocessor());
    }
}
