//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case "ask the questions, then write the project".

pub mod materializer;
pub mod question_flow;
pub mod scaffold_service;

pub use materializer::{GenerationReport, Materializer, WrittenFile};
pub use question_flow::{FlowOutcome, QuestionFlow};
pub use scaffold_service::ScaffoldService;
