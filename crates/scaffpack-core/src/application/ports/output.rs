//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `scaffpack-adapters` crate provides implementations.

use std::path::Path;

use serde_json::Value;

use crate::domain::{ConfirmQuestion, ListQuestion, TemplateName};
use crate::error::ScaffResult;

/// Port for asking the user questions.
///
/// Implemented by:
/// - `scaffpack_adapters::prompt::DefaultsPrompter` (always the default)
/// - `scaffpack_adapters::prompt::ScriptedPrompter` (pre-recorded answers)
/// - `scaffpack_cli::prompt::TerminalPrompter` (dialoguer, interactive)
///
/// ## Force
///
/// When `force` is set an implementation must return the question's default
/// immediately, without touching the terminal.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Ask a single-choice question; returns the selected choice label.
    fn list(&self, question: &ListQuestion, force: bool) -> ScaffResult<String>;

    /// Ask a yes/no question.
    fn confirm(&self, question: &ConfirmQuestion, force: bool) -> ScaffResult<bool>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `scaffpack_adapters::filesystem::LocalFilesystem` (production)
/// - `scaffpack_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ScaffResult<()>;

    /// Read a file; `None` when it does not exist.
    fn read_file(&self, path: &Path) -> ScaffResult<Option<String>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `scaffpack_adapters::templates::EmbeddedTemplates` (compiled in)
/// - `scaffpack_adapters::templates::DirectoryTemplates` (user overrides)
pub trait TemplateSource: Send + Sync {
    /// Load the raw content of a template.
    fn load(&self, name: TemplateName) -> ScaffResult<String>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `scaffpack_adapters::renderer::TeraRenderer`
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` with `variables` (a JSON object).
    fn render(&self, name: TemplateName, source: &str, variables: &Value) -> ScaffResult<String>;
}
