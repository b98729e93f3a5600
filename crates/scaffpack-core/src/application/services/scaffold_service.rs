//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates one generation run:
//! 1. Run the question flow to completion
//! 2. Plan the files for the resulting answers
//! 3. Write them under the destination root
//!
//! The materializer never sees a partial outcome: if a prompt fails, the run
//! ends before anything is written.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::{Filesystem, Prompter, TemplateRenderer, TemplateSource},
    domain::GenerationPlan,
    error::ScaffResult,
};

use super::{
    materializer::{GenerationReport, Materializer},
    question_flow::{FlowOutcome, QuestionFlow},
};

/// Main scaffolding service.
pub struct ScaffoldService {
    prompter: Box<dyn Prompter>,
    templates: Box<dyn TemplateSource>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use scaffpack_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     prompter,   // impl Prompter
    ///     templates,  // impl TemplateSource
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        prompter: Box<dyn Prompter>,
        templates: Box<dyn TemplateSource>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            prompter,
            templates,
            renderer,
            filesystem,
        }
    }

    /// Ask every question. `force` resolves each one to its default.
    pub fn ask(&self, force: bool) -> ScaffResult<FlowOutcome> {
        QuestionFlow::new(self.prompter.as_ref(), force).run()
    }

    /// The files a run with this outcome would write.
    pub fn plan(&self, outcome: &FlowOutcome) -> ScaffResult<GenerationPlan> {
        Materializer::plan(outcome)
    }

    /// Write the files for a finished outcome.
    pub fn materialize(
        &self,
        outcome: &FlowOutcome,
        destination: impl AsRef<Path>,
    ) -> ScaffResult<GenerationReport> {
        Materializer::new(
            self.templates.as_ref(),
            self.renderer.as_ref(),
            self.filesystem.as_ref(),
        )
        .materialize(outcome, destination.as_ref())
    }

    /// Ask, then write. The main use case.
    #[instrument(
        skip_all,
        fields(destination = %destination.as_ref().display(), force = force)
    )]
    pub fn generate(
        &self,
        destination: impl AsRef<Path>,
        force: bool,
    ) -> ScaffResult<(FlowOutcome, GenerationReport)> {
        let outcome = self.ask(force)?;
        info!(dependencies = outcome.dependencies.len(), "answers collected");

        let report = self.materialize(&outcome, destination)?;
        info!(files = report.file_count(), "generation completed successfully");
        Ok((outcome, report))
    }
}
