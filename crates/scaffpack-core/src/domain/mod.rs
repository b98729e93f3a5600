// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Scaffpack.
//!
//! This module contains pure business logic. All I/O, prompting and rendering
//! concerns are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or network calls
//! - **No logging**: `tracing` is for the application layer
//! - **Immutable values**: answers and dependency lists are frozen once built
//!
// Public API - what the world sees
pub mod answers;
pub mod dependencies;
pub mod error;
pub mod manifest;
pub mod plan;
pub mod questions;
pub mod value_objects;

mod common;
mod validation;

// Re-exports for convenience
pub use answers::{AnswerRecord, AnswerRecordBuilder, CssConfig, FlatAnswers};
pub use common::RelativePath;
pub use dependencies::{DependencyList, DependencyListBuilder};
pub use error::{DomainError, ErrorCategory};
pub use plan::{FileContent, GenerationPlan, PlannedFile, TemplateName, WriteMode};
pub use questions::{ConfirmQuestion, ListQuestion};
pub use validation::DomainValidator;
pub use value_objects::{CssType, LangType};
