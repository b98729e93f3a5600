//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `SCAFFPACK_*` environment variables, `__` between sections
//!    (`SCAFFPACK_OUTPUT__NO_COLOR=true`)
//! 3. The `--config` file, or `.scaffpack.toml` in the current directory
//! 4. The global config file (see [`AppConfig::config_path`])
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name of the per-project config.
pub const LOCAL_CONFIG_FILE: &str = ".scaffpack.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generation behaviour.
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Log file settings.
    pub logging: LoggingConfig,

    /// Files that contributed to this config, lowest priority first.
    #[serde(skip)]
    pub sources: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Always accept the default answers, as if `--force` were passed.
    pub force: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory whose files override the built-in templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, layering the sources listed in the module docs.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  The global and local files are optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&AppConfig::default()).context("invalid built-in defaults")?,
        );
        let mut sources = Vec::new();

        let global = Self::config_path();
        if global.is_file() {
            builder = builder.add_source(File::from(global.as_path()).format(FileFormat::Toml));
            sources.push(global);
        }

        match config_file {
            Some(path) => {
                builder = builder.add_source(
                    File::from(path)
                        .format(FileFormat::Toml)
                        .required(true),
                );
                sources.push(path.to_path_buf());
            }
            None => {
                let local = PathBuf::from(LOCAL_CONFIG_FILE);
                if local.is_file() {
                    builder =
                        builder.add_source(File::from(local.as_path()).format(FileFormat::Toml));
                    sources.push(local);
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("SCAFFPACK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut config: AppConfig = builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("configuration has invalid values")?;

        debug!(sources = ?sources, "configuration loaded");
        config.sources = sources;
        Ok(config)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.scaffpack.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "scaffpack", "scaffpack")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file with the highest priority that was actually read.
    pub fn active_path(&self) -> Option<&Path> {
        self.sources.last().map(PathBuf::as_path)
    }

    /// Render as TOML, as written by `scaffpack init`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to serialise configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_accept_nothing_silently() {
        let cfg = AppConfig::default();
        assert!(!cfg.generation.force);
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, "auto");
        assert!(cfg.templates.local_path.is_none());
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaffpack.toml");
        std::fs::write(
            &path,
            "[generation]\nforce = true\n\n[templates]\nlocal_path = \"tpl\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.generation.force);
        assert_eq!(cfg.templates.local_path, Some(PathBuf::from("tpl")));
        assert_eq!(cfg.output.format, "auto");
        assert_eq!(cfg.active_path(), Some(path.as_path()));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn toml_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaffpack.toml");
        std::fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
