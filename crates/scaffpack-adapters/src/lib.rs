//! Infrastructure adapters for Scaffpack.
//!
//! This crate implements the ports defined in
//! `scaffpack-core::application::ports`. It contains all external
//! dependencies and I/O operations except the interactive terminal, which
//! belongs to the CLI.

pub mod filesystem;
pub mod prompt;
pub mod renderer;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::{DefaultsPrompter, ScriptedPrompter};
pub use renderer::TeraRenderer;
pub use templates::{DirectoryTemplates, EmbeddedTemplates};
