use serde::de::DeserializeOwned;

use crate::{GetsetConfig, LoggingConfig};

/// Non-fatal findings produced while loading a `getset.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    /// Keys present in the input that the config schema does not know, as dotted paths
    /// (`doc.get_lable`).
    pub unknown_keys: Vec<String>,
    pub warnings: Vec<ConfigWarning>,
}

impl ConfigDiagnostics {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unknown_keys.is_empty() && self.warnings.is_empty()
    }

    /// Emits every finding as a `warn` event. Call after tracing is initialized.
    pub fn report(&self) {
        if self.is_empty() {
            return;
        }
        for key in &self.unknown_keys {
            tracing::warn!(target: "getset.config", key = %key, "unknown config key");
        }
        for warning in &self.warnings {
            match warning {
                ConfigWarning::BlankLabel { toml_path } => tracing::warn!(
                    target: "getset.config",
                    key = %toml_path,
                    "blank doc label; using the default"
                ),
                ConfigWarning::LoggingLevelInvalid { value, normalized } => tracing::warn!(
                    target: "getset.config",
                    value = %value,
                    normalized = %normalized,
                    "invalid logging.level; falling back to info"
                ),
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A doc label was blank and the default label is used instead.
    BlankLabel { toml_path: String },
    LoggingLevelInvalid { value: String, normalized: String },
}

pub(crate) fn validate(config: &GetsetConfig) -> Vec<ConfigWarning> {
    let mut out = Vec::new();

    for (toml_path, label) in [
        ("doc.get_label", &config.doc.get_label),
        ("doc.set_label", &config.doc.set_label),
    ] {
        if label.trim().is_empty() {
            out.push(ConfigWarning::BlankLabel {
                toml_path: toml_path.to_owned(),
            });
        }
    }

    let normalized = config.logging.directives();
    if !config.logging.level.trim().is_empty()
        && tracing_subscriber::EnvFilter::try_new(normalized.clone()).is_err()
    {
        out.push(ConfigWarning::LoggingLevelInvalid {
            value: config.logging.level.clone(),
            normalized,
        });
    }

    out
}

pub(crate) fn deserialize_toml_with_unknown_keys<T: DeserializeOwned>(
    text: &str,
) -> Result<(T, Vec<String>), toml::de::Error> {
    let mut unknown = Vec::<String>::new();
    let deserializer = toml::de::Deserializer::new(text);
    let value = serde_ignored::deserialize(deserializer, |path| {
        unknown.push(path.to_string().trim_start_matches('.').to_owned());
    })?;
    unknown.sort();
    unknown.dedup();
    Ok((value, unknown))
}
