//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ProvisionSettings`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `HATCH__<SECTION>__<KEY>`, e.g.
//!    `HATCH__INTERPRETER__PROGRAM=python3.12`
//! 2. Config file: `--config FILE` (must exist) or the per-user
//!    `config.toml` (optional)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use hatch_core::{
    application::ProvisionSettings,
    domain::{InterpreterVersion, Platform},
};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub interpreter: InterpreterConfig,
    pub environment: EnvironmentConfig,
    pub frontend: FrontendConfig,
    pub assets: AssetsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Program used for the version check and `-m venv`.
    pub program: String,
    /// Oldest accepted version, `major.minor[.patch]`.
    pub minimum_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Virtual environment directory, relative to FOLDER.
    pub dir: String,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontendConfig {
    pub package_manager: String,
    pub ui_package: String,
    pub dist_files: Vec<String>,
    pub dev_script: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsConfig {
    pub htmx_url: String,
    pub tailwind_release_url: String,
    /// Unset means no timeout.
    pub download_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = ProvisionSettings::default();
        Self {
            interpreter: InterpreterConfig {
                program: settings.interpreter,
                minimum_version: settings.minimum_interpreter.to_string(),
            },
            environment: EnvironmentConfig {
                dir: settings.environment_dir,
                requirements: settings.requirements,
            },
            frontend: FrontendConfig {
                package_manager: settings.package_manager,
                ui_package: settings.ui_package,
                dist_files: settings.dist_files,
                dev_script: settings.dev_script,
            },
            assets: AssetsConfig {
                htmx_url: settings.htmx_url,
                tailwind_release_url: settings.tailwind_release_url,
                download_timeout_secs: None,
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then a file, then the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. With
    /// `None` the per-user file is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix("HATCH"))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default()).context("Failed to encode defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).required(required))
            .add_source(env.prefix_separator("__").separator("__"))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.hatch.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "hatch", "hatch")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".hatch.toml"))
    }

    /// Settings for the provisioning stages on this host.
    pub fn provision_settings(&self) -> CliResult<ProvisionSettings> {
        let minimum = self
            .interpreter
            .minimum_version
            .parse::<InterpreterVersion>()
            .map_err(|e| CliError::ConfigError {
                message: format!(
                    "interpreter.minimum_version '{}' is not a version",
                    self.interpreter.minimum_version
                ),
                source: Some(Box::new(e)),
            })?;

        if self.environment.dir.trim().is_empty() {
            return Err(CliError::ConfigError {
                message: "environment.dir must not be empty".into(),
                source: None,
            });
        }

        Ok(ProvisionSettings {
            interpreter: self.interpreter.program.clone(),
            minimum_interpreter: minimum,
            environment_dir: self.environment.dir.clone(),
            requirements: self.environment.requirements.clone(),
            package_manager: self.frontend.package_manager.clone(),
            ui_package: self.frontend.ui_package.clone(),
            dist_files: self.frontend.dist_files.clone(),
            dev_script: self.frontend.dev_script.clone(),
            htmx_url: self.assets.htmx_url.clone(),
            tailwind_release_url: self.assets.tailwind_release_url.clone(),
            platform: Platform::host(),
        })
    }

    pub fn download_timeout(&self) -> Option<Duration> {
        self.assets.download_timeout_secs.map(Duration::from_secs)
    }
}
