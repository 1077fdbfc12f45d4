//! Configuration file support for skyguard.
//!
//! Provides YAML-based configuration through `skyguard.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::maintenance::domain::ActionRequired;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "skyguard.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub fleet: Option<PathBuf>,
    pub format: Option<String>,
    pub within_days: Option<u32>,
    pub actions: Option<Vec<String>>,
    pub fail_on_immediate: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured report format, if any. Validated at load time.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|value| OutputFormat::from_str(value).map_err(anyhow::Error::msg))
            .transpose()
    }

    /// The configured action filter, empty when absent. Validated at load time.
    pub fn action_filter(&self) -> Result<Vec<ActionRequired>> {
        self.actions
            .iter()
            .flatten()
            .map(|value| ActionRequired::from_str(value).map_err(anyhow::Error::msg))
            .collect()
    }

    /// Warning lines for keys this version does not understand, sorted by key.
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!(
                "Invalid config: format: {}\n\n💡 Hint: Use 'json' or 'markdown'.",
                e
            );
        }
    }

    if let Some(ref actions) = config.actions {
        for (i, action) in actions.iter().enumerate() {
            if ActionRequired::from_str(action).is_err() {
                bail!(
                    "Invalid config: actions[{}] '{}' is not an action.\n\n\
                     💡 Hint: Valid actions are Immediate, Procure and Monitor.",
                    i,
                    action
                );
            }
        }
    }

    if let Some(ref fleet) = config.fleet {
        if fleet.as_os_str().is_empty() {
            bail!(
                "Invalid config: fleet must not be empty.\n\n\
                 💡 Hint: Point 'fleet' at a snapshot file (e.g., \"data/fleet.json\")."
            );
        }
    }

    Ok(())
}
