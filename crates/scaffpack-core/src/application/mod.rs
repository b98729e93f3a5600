//! Application layer for Scaffpack.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (QuestionFlow, Materializer, ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Business rules (choices, dependency names, manifest shape) live in
//! `crate::domain`; this layer sequences them against the ports.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    FlowOutcome, GenerationReport, Materializer, QuestionFlow, ScaffoldService, WrittenFile,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Prompter, TemplateRenderer, TemplateSource};

pub use error::ApplicationError;
