//! User template directory with embedded fallback.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use scaffpack_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::TemplateName,
    error::{ScaffError, ScaffResult},
};
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use super::embedded::EmbeddedTemplates;

/// Templates read from a directory, keyed by file name.
///
/// Only the top level of the directory is scanned. Files that do not match a
/// known template name are ignored; known names that are absent fall back to
/// the embedded copy.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
    overrides: HashMap<TemplateName, PathBuf>,
}

impl DirectoryTemplates {
    /// Index `root`. Fails if it is not a readable directory.
    #[instrument(fields(root = %root.as_ref().display()), skip(root))]
    pub fn open(root: impl AsRef<Path>) -> ScaffResult<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(ScaffError::Configuration {
                message: format!("template directory '{}' does not exist", root.display()),
            });
        }

        let mut overrides = HashMap::new();
        for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: root.clone(),
                reason: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            match TemplateName::ALL
                .into_iter()
                .find(|t| t.file_name() == file_name)
            {
                Some(name) => {
                    debug!(template = %name, "override found");
                    overrides.insert(name, entry.into_path());
                }
                None => debug!(file = %file_name, "ignoring unknown template file"),
            }
        }

        if overrides.is_empty() {
            warn!(root = %root.display(), "template directory has no known templates");
        } else {
            info!(count = overrides.len(), "template overrides loaded");
        }
        Ok(Self { root, overrides })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `name` comes from the directory rather than the binary.
    pub fn overrides(&self, name: TemplateName) -> bool {
        self.overrides.contains_key(&name)
    }
}

impl TemplateSource for DirectoryTemplates {
    fn load(&self, name: TemplateName) -> ScaffResult<String> {
        let Some(path) = self.overrides.get(&name) else {
            return Ok(EmbeddedTemplates::content(name).to_string());
        };

        std::fs::read_to_string(path).map_err(|e| {
            ApplicationError::TemplateNotFound {
                name: format!("{} ({}: {})", name, path.display(), e),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_by_file_name_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "# custom").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let templates = DirectoryTemplates::open(dir.path()).unwrap();

        assert!(templates.overrides(TemplateName::Readme));
        assert!(!templates.overrides(TemplateName::Html));
        assert_eq!(templates.load(TemplateName::Readme).unwrap(), "# custom");
        assert_eq!(
            templates.load(TemplateName::Html).unwrap(),
            EmbeddedTemplates::content(TemplateName::Html)
        );
    }

    #[test]
    fn dotfiles_can_be_overridden() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".babelrc"), "{}").unwrap();

        let templates = DirectoryTemplates::open(dir.path()).unwrap();
        assert_eq!(templates.load(TemplateName::Babelrc).unwrap(), "{}");
    }

    #[test]
    fn nested_files_are_not_overrides() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("index.js"), "nested").unwrap();

        let templates = DirectoryTemplates::open(dir.path()).unwrap();
        assert!(!templates.overrides(TemplateName::EntryFile));
    }

    #[test]
    fn missing_directory_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DirectoryTemplates::open(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ScaffError::Configuration { .. }));
    }
}
