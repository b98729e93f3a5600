//! Implementation of the `scaffpack new` command.
//!
//! Responsibility: pick the adapters the flags and config ask for, run the
//! question flow, then either describe the plan (`--dry-run`) or write it.
//! No business logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use scaffpack_adapters::{
    DefaultsPrompter, LocalFilesystem, ScriptedPrompter, TeraRenderer,
    templates::{resolve_override_dir, template_source},
};
use scaffpack_core::{
    application::{FlowOutcome, ScaffoldService, ports::Prompter},
    domain::{AnswerRecord, DependencyList, WriteMode},
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `scaffpack new` command.
///
/// Dispatch sequence:
/// 1. Validate the destination
/// 2. Build the prompter and template source
/// 3. Ask every question
/// 4. Early-exit if `--dry-run`
/// 5. Write the files via `ScaffoldService`
/// 6. Print a summary and next steps
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Destination
    validate_destination(&args.dir)?;
    let force = args.force || config.generation.force;

    // 2. Adapters
    let prompter = build_prompter(&args, force, output.supports_color())?;
    let override_dir =
        resolve_override_dir(args.template_dir.as_deref(), config.templates.local_path.as_deref());
    if let Some(dir) = &override_dir {
        output.info(&format!("Using template overrides from {}", dir.display()))?;
    }
    let service = ScaffoldService::new(
        prompter,
        template_source(override_dir.as_deref())?,
        Box::new(TeraRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    // 3. Questions
    let outcome = service.ask(force)?;
    debug!(answers = %outcome.answers, dependencies = %outcome.dependencies, "answers collected");

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&outcome)?;
        let files: Vec<FileEntry> = plan
            .files()
            .iter()
            .map(|f| FileEntry {
                path: args.dir.join(f.destination()),
                mode: f.write_mode(),
            })
            .collect();

        output.json(&Summary::new(&outcome, &files, true))?;
        output.info(&format!(
            "Dry run: would write {} files into {}",
            files.len(),
            args.dir.display()
        ))?;
        show_outcome(&outcome, &files, &output)?;
        return Ok(());
    }

    // 5. Write
    info!(path = %args.dir.display(), "Generation started");
    let spinner = output.spinner("Writing project files...");
    let result = service.materialize(&outcome, &args.dir);
    spinner.finish_and_clear();
    let report = result?;

    let files: Vec<FileEntry> = report
        .files
        .iter()
        .map(|f| FileEntry {
            path: f.path.clone(),
            mode: f.mode,
        })
        .collect();

    // 6. Summary + next steps
    output.json(&Summary::new(&outcome, &files, false))?;
    output.success(&format!(
        "Project generated in {} ({} files)",
        args.dir.display(),
        report.file_count()
    ))?;
    show_outcome(&outcome, &files, &output)?;

    if !global.quiet && output.format() != OutputFormat::Json {
        output.print("")?;
        output.print("Next steps:")?;
        for step in next_steps(&args.dir, outcome.answers.dev_server()) {
            output.print(&format!("  {step}"))?;
        }
    }

    Ok(())
}

// ── Adapter selection ─────────────────────────────────────────────────────────

fn validate_destination(dir: &Path) -> CliResult<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(CliError::InvalidDestination {
            path: dir.to_path_buf(),
            reason: "a file with that name already exists".into(),
        });
    }
    Ok(())
}

/// Recorded `--answer`s first, then the terminal (or the defaults).
fn build_prompter(args: &NewArgs, force: bool, colorful: bool) -> CliResult<Box<dyn Prompter>> {
    let fallback = fallback_prompter(force || !args.answers.is_empty(), colorful)?;
    if args.answers.is_empty() {
        return Ok(fallback);
    }

    let scripted = ScriptedPrompter::new(fallback)
        .with_pairs(&args.answers)
        .map_err(|e| CliError::InvalidInput {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })?;
    Ok(Box::new(scripted))
}

/// The terminal when stdin is one; otherwise the defaults, but only if the
/// caller opted out of questions with `--force` or `--answer`.
#[cfg(feature = "interactive")]
fn fallback_prompter(non_interactive_ok: bool, colorful: bool) -> CliResult<Box<dyn Prompter>> {
    use std::io::IsTerminal as _;

    if std::io::stdin().is_terminal() {
        Ok(Box::new(crate::prompt::TerminalPrompter::new(colorful)))
    } else if non_interactive_ok {
        Ok(Box::new(DefaultsPrompter::new()))
    } else {
        Err(CliError::NotInteractive)
    }
}

#[cfg(not(feature = "interactive"))]
fn fallback_prompter(non_interactive_ok: bool, _colorful: bool) -> CliResult<Box<dyn Prompter>> {
    if non_interactive_ok {
        Ok(Box::new(DefaultsPrompter::new()))
    } else {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct FileEntry {
    path: PathBuf,
    mode: WriteMode,
}

/// JSON document printed with `--output-format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    dry_run: bool,
    answers: &'a AnswerRecord,
    dependencies: &'a DependencyList,
    files: &'a [FileEntry],
}

impl<'a> Summary<'a> {
    fn new(outcome: &'a FlowOutcome, files: &'a [FileEntry], dry_run: bool) -> Self {
        Self {
            dry_run,
            answers: &outcome.answers,
            dependencies: &outcome.dependencies,
            files,
        }
    }
}

fn show_outcome(outcome: &FlowOutcome, files: &[FileEntry], out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Setup:        {}", outcome.answers))?;
    if outcome.dependencies.is_empty() {
        out.print("  Dependencies: webpack, webpack-cli")?;
    } else {
        out.print(&format!(
            "  Dependencies: webpack, webpack-cli, {}",
            outcome.dependencies
        ))?;
    }
    out.print("")?;
    out.header("Files")?;
    for file in files {
        out.detail(&format!(
            "  {:<8} {}",
            file.mode.to_string(),
            file.path.display()
        ))?;
    }
    Ok(())
}

fn next_steps(dir: &Path, dev_server: bool) -> Vec<String> {
    let mut steps = Vec::new();
    if dir != Path::new(".") {
        steps.push(format!("cd {}", dir.display()));
    }
    steps.push("npm install".into());
    steps.push(if dev_server {
        "npx webpack serve".into()
    } else {
        "npx webpack".into()
    });
    steps
}

// ── Tests ─────────────────────────────────────────────────────────────────────
