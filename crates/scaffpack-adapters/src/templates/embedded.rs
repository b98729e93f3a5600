//! Templates compiled into the binary.

use scaffpack_core::{
    application::ports::TemplateSource, domain::TemplateName, error::ScaffResult,
};

/// The default template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Raw content of a built-in template.
    pub const fn content(name: TemplateName) -> &'static str {
        match name {
            TemplateName::EntryFile => include_str!("../../templates/default/index.js"),
            TemplateName::Readme => include_str!("../../templates/default/README.md"),
            TemplateName::Html => include_str!("../../templates/default/template.html"),
            TemplateName::WebpackConfig => {
                include_str!("../../templates/default/webpack.config.js.tera")
            }
            TemplateName::Babelrc => include_str!("../../templates/default/.babelrc"),
            TemplateName::TsConfig => include_str!("../../templates/default/tsconfig.json"),
            TemplateName::PostCssConfig => {
                include_str!("../../templates/default/postcss.config.js")
            }
        }
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn load(&self, name: TemplateName) -> ScaffResult<String> {
        Ok(Self::content(name).to_string())
    }
}
