//! Template sources.
//!
//! Built-in templates are compiled into the binary. A user directory can
//! override any of them by file name.
//!
//! # Override resolution order
//!
//! The first directory found wins:
//!
//! 1. an explicit path (the `--template-dir` flag)
//! 2. `$SCAFFPACK_TEMPLATES_DIR`
//! 3. a configured path (`templates.local_path`)
//!
//! With none of these, only the embedded templates are used.

mod directory;
mod embedded;

use std::path::{Path, PathBuf};

use scaffpack_core::{application::ports::TemplateSource, error::ScaffResult};
use tracing::debug;

pub use directory::DirectoryTemplates;
pub use embedded::EmbeddedTemplates;

/// Environment variable naming an override directory.
pub const TEMPLATES_DIR_ENV: &str = "SCAFFPACK_TEMPLATES_DIR";

/// Pick the override directory, if any.
pub fn resolve_override_dir(explicit: Option<&Path>, configured: Option<&Path>) -> Option<PathBuf> {
    let from_env = std::env::var_os(TEMPLATES_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    first_candidate(explicit.map(Path::to_path_buf), from_env, configured.map(Path::to_path_buf))
}

fn first_candidate(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
    configured: Option<PathBuf>,
) -> Option<PathBuf> {
    let chosen = explicit.or(from_env).or(configured);
    if let Some(dir) = &chosen {
        debug!(path = %dir.display(), "template override directory selected");
    }
    chosen
}

/// Build the template source for an optional override directory.
pub fn template_source(override_dir: Option<&Path>) -> ScaffResult<Box<dyn TemplateSource>> {
    match override_dir {
        Some(dir) => Ok(Box::new(DirectoryTemplates::open(dir)?)),
        None => Ok(Box::new(EmbeddedTemplates::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_beats_env_beats_config() {
        let pick = |e: Option<&str>, v: Option<&str>, c: Option<&str>| {
            first_candidate(e.map(PathBuf::from), v.map(PathBuf::from), c.map(PathBuf::from))
        };

        assert_eq!(pick(Some("a"), Some("b"), Some("c")), Some(PathBuf::from("a")));
        assert_eq!(pick(None, Some("b"), Some("c")), Some(PathBuf::from("b")));
        assert_eq!(pick(None, None, Some("c")), Some(PathBuf::from("c")));
        assert_eq!(pick(None, None, None), None);
    }

    #[test]
    fn no_override_uses_embedded() {
        let source = template_source(None).unwrap();
        assert!(source.load(scaffpack_core::domain::TemplateName::Readme).is_ok());
    }
}
