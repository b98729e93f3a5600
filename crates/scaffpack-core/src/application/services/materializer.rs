//! File Materializer - turns a [`FlowOutcome`] into files.
//!
//! Planning is pure and produces a [`GenerationPlan`]; materializing walks the
//! plan in order against the filesystem port. Each step is independent and
//! nothing is retried or rolled back.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateSource},
    },
    domain::{
        DomainValidator as validator, FileContent, GenerationPlan, LangType, PlannedFile,
        RelativePath, TemplateName, WriteMode, manifest,
    },
    error::{ScaffError, ScaffResult},
};

use super::question_flow::FlowOutcome;

/// A file written by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub mode: WriteMode,
}

/// What a run wrote, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub files: Vec<WrittenFile>,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Writes the planned files through the driven ports.
pub struct Materializer<'a> {
    templates: &'a dyn TemplateSource,
    renderer: &'a dyn TemplateRenderer,
    filesystem: &'a dyn Filesystem,
}

impl<'a> Materializer<'a> {
    pub fn new(
        templates: &'a dyn TemplateSource,
        renderer: &'a dyn TemplateRenderer,
        filesystem: &'a dyn Filesystem,
    ) -> Self {
        Self {
            templates,
            renderer,
            filesystem,
        }
    }

    /// Compute the ordered list of files for an outcome.
    pub fn plan(outcome: &FlowOutcome) -> ScaffResult<GenerationPlan> {
        let answers = &outcome.answers;
        validator::validate_answers(answers)?;

        let mut plan = GenerationPlan::new();

        plan.push(PlannedFile::Manifest {
            destination: RelativePath::try_new("package.json")?,
            fragment: manifest::fragment(answers.dev_server(), &outcome.dependencies),
        });

        let entry = answers.lang_type().entry_path();
        plan.push(literal(TemplateName::EntryFile, &entry)?);
        plan.push(literal(TemplateName::Readme, "README.md")?);
        plan.push(literal(TemplateName::Html, "index.html")?);

        let mut variables = serde_json::to_value(answers).map_err(|e| ScaffError::Internal {
            message: format!("answers did not serialize: {e}"),
        })?;
        if let Value::Object(map) = &mut variables {
            map.insert("entry".into(), Value::String(entry));
        }
        plan.push(PlannedFile::Template {
            template: TemplateName::WebpackConfig,
            destination: RelativePath::try_new("webpack.config.js")?,
            content: FileContent::Parameterized(variables),
        });

        match answers.lang_type() {
            LangType::Es6 => plan.push(literal(TemplateName::Babelrc, ".babelrc")?),
            LangType::TypeScript => plan.push(literal(TemplateName::TsConfig, "tsconfig.json")?),
            LangType::None => {}
        }

        if answers.is_post_css() {
            plan.push(literal(TemplateName::PostCssConfig, "postcss.config.js")?);
        }

        validator::validate_plan(&plan)?;
        Ok(plan)
    }

    /// Plan and write every file under `root`.
    #[instrument(skip_all, fields(root = %root.display(), answers = %outcome.answers))]
    pub fn materialize(&self, outcome: &FlowOutcome, root: &Path) -> ScaffResult<GenerationReport> {
        let plan = Self::plan(outcome)?;
        self.write_plan(&plan, root)
    }

    /// Write an already computed plan under `root`.
    pub fn write_plan(&self, plan: &GenerationPlan, root: &Path) -> ScaffResult<GenerationReport> {
        self.filesystem.create_dir_all(root)?;

        let mut report = GenerationReport {
            root: root.to_path_buf(),
            files: Vec::with_capacity(plan.files().len()),
        };

        for file in plan.files() {
            let path = root.join(file.destination());
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            match file {
                PlannedFile::Manifest { fragment, .. } => {
                    let existing = self.filesystem.read_file(&path)?;
                    let merged = manifest::extend(existing.as_deref(), fragment)?;
                    self.filesystem.write_file(&path, &merged)?;
                }
                PlannedFile::Template {
                    template, content, ..
                } => {
                    let rendered = self.render(*template, content)?;
                    self.filesystem.write_file(&path, &rendered)?;
                }
            }

            debug!(path = %path.display(), mode = %file.write_mode(), "file written");
            report.files.push(WrittenFile {
                path,
                mode: file.write_mode(),
            });
        }

        info!(files = report.file_count(), "materialization complete");
        Ok(report)
    }

    fn render(&self, template: TemplateName, content: &FileContent) -> ScaffResult<String> {
        let source = self.templates.load(template)?;
        match content {
            FileContent::Literal => Ok(source),
            FileContent::Parameterized(variables) => {
                if !variables.is_object() {
                    return Err(ApplicationError::RenderingFailed {
                        name: template.to_string(),
                        reason: "template variables must be an object".into(),
                    }
                    .into());
                }
                self.renderer.render(template, &source, variables)
            }
        }
    }
}

fn literal(template: TemplateName, destination: &str) -> ScaffResult<PlannedFile> {
    Ok(PlannedFile::Template {
        template,
        destination: RelativePath::try_new(destination)?,
        content: FileContent::Literal,
    })
}
