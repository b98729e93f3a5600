//! Scaffpack Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Scaffpack
//! webpack project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          scaffpack-cli (CLI)            │
//! │   (terminal prompter, config, output)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (QuestionFlow, Materializer, Scaffold)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Prompter, Filesystem, Source, Render)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    scaffpack-adapters (Infrastructure)  │
//! │ (LocalFilesystem, Tera, Embedded, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (AnswerRecord, DependencyList, Plan)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scaffpack_core::application::ScaffoldService;
//!
//! let service = ScaffoldService::new(prompter, templates, renderer, filesystem);
//! let (outcome, report) = service.generate("./my-app", false)?;
//! println!("{}", outcome.dependencies);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FlowOutcome, GenerationReport, Materializer, QuestionFlow, ScaffoldService,
        ports::{Filesystem, Prompter, TemplateRenderer, TemplateSource},
    };
    pub use crate::domain::{
        AnswerRecord, ConfirmQuestion, CssConfig, CssType, DependencyList, GenerationPlan,
        LangType, ListQuestion, TemplateName,
    };
    pub use crate::error::{ScaffError, ScaffResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
