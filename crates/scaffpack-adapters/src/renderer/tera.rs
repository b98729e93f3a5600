//! Tera-backed renderer for parameterized templates.

use std::error::Error as _;

use scaffpack_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::TemplateName,
    error::ScaffResult,
};
use serde_json::Value;
use tera::{Context, Tera};
use tracing::{debug, instrument};

/// Renders templates with Tera.
///
/// Each call compiles the source into a fresh registry, so user supplied
/// templates never leak into each other.
#[derive(Debug, Clone, Copy)]
pub struct TeraRenderer;

impl TeraRenderer {
    /// Create a new Tera renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeraRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for TeraRenderer {
    #[instrument(skip(self, source, variables), fields(template = %name))]
    fn render(&self, name: TemplateName, source: &str, variables: &Value) -> ScaffResult<String> {
        let failed = |e: tera::Error| ApplicationError::RenderingFailed {
            name: name.to_string(),
            reason: error_chain(&e),
        };

        let mut tera = Tera::default();
        tera.add_raw_template(name.file_name(), source)
            .map_err(failed)?;
        let context = Context::from_value(variables.clone()).map_err(failed)?;
        let rendered = tera.render(name.file_name(), &context).map_err(failed)?;

        debug!(bytes = rendered.len(), "template rendered");
        Ok(rendered)
    }
}

/// Tera nests the useful message in the source chain.
fn error_chain(e: &tera::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
