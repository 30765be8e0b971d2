use std::path::{Path, PathBuf};

use getset_core::DocLabels;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod diagnostics;
mod logging;
mod schema;

pub use diagnostics::{ConfigDiagnostics, ConfigWarning};
pub use logging::{init_tracing, LoggingConfig};
pub use schema::json_schema;

/// Environment variable pointing at an explicit `getset.toml`.
pub const GETSET_CONFIG_ENV_VAR: &str = "GETSET_CONFIG_PATH";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct DocConfig {
    /// Verb placed in front of the field description in getter docs.
    #[serde(default = "DocConfig::default_get_label")]
    pub get_label: String,

    /// Verb placed in front of the field description in setter docs.
    #[serde(default = "DocConfig::default_set_label")]
    pub set_label: String,
}

impl DocConfig {
    fn default_get_label() -> String {
        DocLabels::DEFAULT_GET.to_owned()
    }

    fn default_set_label() -> String {
        DocLabels::DEFAULT_SET.to_owned()
    }

    fn normalize(&mut self) {
        let trimmed = self.get_label.trim();
        self.get_label = if trimmed.is_empty() {
            Self::default_get_label()
        } else {
            trimmed.to_owned()
        };

        let trimmed = self.set_label.trim();
        self.set_label = if trimmed.is_empty() {
            Self::default_set_label()
        } else {
            trimmed.to_owned()
        };
    }
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            get_label: Self::default_get_label(),
            set_label: Self::default_set_label(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct GetsetConfig {
    /// Generated documentation comments.
    #[serde(default)]
    pub doc: DocConfig,

    /// Logging output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // `Display` includes a source snippet; keep only the message.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl GetsetConfig {
    /// Load a config file from TOML.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let (config, _) = Self::load_from_path_with_diagnostics(path)?;
        Ok(config)
    }

    /// Load a config file from TOML and report unknown keys and recoverable values.
    pub fn load_from_path_with_diagnostics(
        path: impl AsRef<Path>,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_str_with_diagnostics(&text)
    }

    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        let (config, _) = Self::load_from_str_with_diagnostics(text)?;
        Ok(config)
    }

    pub fn load_from_str_with_diagnostics(
        text: &str,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let (mut config, unknown_keys) =
            diagnostics::deserialize_toml_with_unknown_keys::<GetsetConfig>(text)?;

        let diagnostics = ConfigDiagnostics {
            unknown_keys,
            warnings: diagnostics::validate(&config),
        };

        config.doc.normalize();
        Ok((config, diagnostics))
    }

    pub fn doc_labels(&self) -> DocLabels {
        DocLabels::new(self.doc.get_label.clone(), self.doc.set_label.clone())
    }
}

const CONFIG_FILE_NAMES: [&str; 2] = ["getset.toml", ".getset.toml"];

/// Discover the config file for a workspace root.
///
/// Search order:
/// 1) `GETSET_CONFIG_PATH` when set and non-empty (absolute or relative to `workspace_root`)
/// 2) `getset.toml` in `workspace_root`
/// 3) `.getset.toml` in `workspace_root`
pub fn discover_config_path(workspace_root: &Path) -> Option<PathBuf> {
    std::env::var_os(GETSET_CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(|value| workspace_root.join(value))
        .or_else(|| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| workspace_root.join(name))
                .find(|path| path.is_file())
        })
        .map(|path| path.canonicalize().unwrap_or(path))
}

/// Load the config for a workspace root, falling back to defaults when no file is found.
pub fn load_for_workspace(
    workspace_root: &Path,
) -> Result<(GetsetConfig, Option<PathBuf>), ConfigError> {
    let (config, path, _) = load_for_workspace_with_diagnostics(workspace_root)?;
    Ok((config, path))
}

pub fn load_for_workspace_with_diagnostics(
    workspace_root: &Path,
) -> Result<(GetsetConfig, Option<PathBuf>, ConfigDiagnostics), ConfigError> {
    match discover_config_path(workspace_root) {
        Some(path) => {
            let (config, diagnostics) = GetsetConfig::load_from_path_with_diagnostics(&path)?;
            Ok((config, Some(path), diagnostics))
        }
        None => Ok((GetsetConfig::default(), None, ConfigDiagnostics::default())),
    }
}
