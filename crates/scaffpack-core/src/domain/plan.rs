use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::domain::{common::RelativePath, error::DomainError};

/// A template shipped with the tool, addressed by its source file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemplateName {
    EntryFile,
    Readme,
    Html,
    WebpackConfig,
    Babelrc,
    TsConfig,
    PostCssConfig,
}

impl TemplateName {
    pub const ALL: [TemplateName; 7] = [
        Self::EntryFile,
        Self::Readme,
        Self::Html,
        Self::WebpackConfig,
        Self::Babelrc,
        Self::TsConfig,
        Self::PostCssConfig,
    ];

    /// File name inside a template directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::EntryFile => "index.js",
            Self::Readme => "README.md",
            Self::Html => "template.html",
            Self::WebpackConfig => "webpack.config.js.tera",
            Self::Babelrc => ".babelrc",
            Self::TsConfig => "tsconfig.json",
            Self::PostCssConfig => "postcss.config.js",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// How a template's content becomes file content.
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    /// Copied unchanged.
    Literal,
    /// Rendered with these variables.
    Parameterized(Value),
}

/// One step of a generation run.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedFile {
    /// Additively merged into an existing JSON file.
    Manifest {
        destination: RelativePath,
        fragment: Value,
    },
    /// Rendered from a template, overwriting whatever is there.
    Template {
        template: TemplateName,
        destination: RelativePath,
        content: FileContent,
    },
}

impl PlannedFile {
    pub fn destination(&self) -> &RelativePath {
        match self {
            Self::Manifest { destination, .. } | Self::Template { destination, .. } => destination,
        }
    }

    pub fn write_mode(&self) -> WriteMode {
        match self {
            Self::Manifest { .. } => WriteMode::Merged,
            Self::Template { .. } => WriteMode::Rendered,
        }
    }
}

/// Whether a file was merged into or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    Merged,
    Rendered,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merged => f.write_str("merged"),
            Self::Rendered => f.write_str("rendered"),
        }
    }
}

/// Ordered list of files a run will produce.
///
/// This is the output of planning. It contains no I/O, only data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationPlan {
    pub(crate) files: Vec<PlannedFile>,
}

impl GenerationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: PlannedFile) {
        self.files.push(file);
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn destinations(&self) -> impl Iterator<Item = &RelativePath> {
        self.files.iter().map(PlannedFile::destination)
    }

    /// Whether any step writes `path` (given relative to the root).
    pub fn writes(&self, path: &str) -> bool {
        RelativePath::try_new(path)
            .map(|p| self.destinations().any(|d| *d == p))
            .unwrap_or(false)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidAnswer(
                "generation plan is empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for destination in self.destinations() {
            if !seen.insert(destination) {
                return Err(DomainError::DuplicatePath {
                    path: destination.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(template: TemplateName, path: &str) -> PlannedFile {
        PlannedFile::Template {
            template,
            destination: RelativePath::try_new(path).unwrap(),
            content: FileContent::Literal,
        }
    }

    #[test]
    fn writes_matches_normalized_paths() {
        let mut plan = GenerationPlan::new();
        plan.push(literal(TemplateName::EntryFile, "./src/index.js"));

        assert!(plan.writes("src/index.js"));
        assert!(plan.writes("./src/index.js"));
        assert!(!plan.writes("src/index.ts"));
    }

    #[test]
    fn validate_rejects_duplicates() {
        let mut plan = GenerationPlan::new();
        plan.push(literal(TemplateName::Readme, "README.md"));
        plan.push(literal(TemplateName::Readme, "./README.md"));

        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty() {
        assert!(GenerationPlan::new().validate().is_err());
    }

    #[test]
    fn write_mode_follows_kind() {
        let manifest = PlannedFile::Manifest {
            destination: RelativePath::try_new("package.json").unwrap(),
            fragment: Value::Null,
        };
        assert_eq!(manifest.write_mode(), WriteMode::Merged);
        assert_eq!(
            literal(TemplateName::Html, "index.html").write_mode(),
            WriteMode::Rendered
        );
    }
}
