//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dpatterns/dpatterns.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `DPATTERNS_*` prefix, `__` between nested keys

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{SettingsError, SettingsResult};

/// How `composite` prints a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// One-line structural string, e.g. `root(A, inner(B, C))`
    #[default]
    Inline,
    /// Drawn tree, one node per line
    Tree,
}

/// What `iterate` prints for each visited node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// The node name only
    #[default]
    Name,
    /// The node's full rendering, subtree included
    Render,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub style: RenderStyle,
    pub label: LabelMode,
}

/// Effective settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tree expression used when a command gets no tree argument
    pub tree: Option<String>,
    pub render: RenderConfig,
}

/// Get the XDG config directory for dpatterns.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dpatterns").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dpatterns.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> SettingsResult<Self> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            debug!("global config: {}", global_path.display());
            builder = builder.add_source(
                File::from(global_path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        if let Some(path) = config_file {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("DPATTERNS")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> SettingsResult<String> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# dpatterns configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/dpatterns/dpatterns.toml
#   Explicit: dpatterns --config <FILE>
#   Env:      DPATTERNS_* environment variables (DPATTERNS_RENDER__STYLE=tree)

# Default tree expression for composite/iterate/info
# tree = "root(A, linked:inner(B, C), D)"

[render]
# "inline" or "tree"
# style = "inline"

# "name" or "render"
# label = "name"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError::Config {
        message: e.to_string(),
    }
}
