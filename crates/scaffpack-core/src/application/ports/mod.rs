//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `scaffpack-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Prompter`: Asking the user questions
//!   - `Filesystem`: File operations
//!   - `TemplateSource`: Template lookup
//!   - `TemplateRenderer`: Variable substitution

pub mod output;

pub use output::{Filesystem, Prompter, TemplateRenderer, TemplateSource};

#[cfg(test)]
pub use output::MockPrompter;
