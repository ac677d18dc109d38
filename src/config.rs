//! Configuration file support for build-compat.
//!
//! Provides YAML-based configuration through `build-compat.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line overrides.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::adapters::outbound::page::WidgetOptions;
use crate::application::dto::Endpoints;
use crate::compatibility::domain::ComponentCategory;
use crate::shared::error::CheckerError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "build-compat.config.yml";

/// Backend used when neither the command line nor the config file names one
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub endpoints: Option<EndpointsConfig>,
    pub widget: Option<WidgetOptions>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Endpoint path overrides. Absent entries keep the default path.
#[derive(Debug, Deserialize, Default)]
pub struct EndpointsConfig {
    pub cpus: Option<String>,
    pub gpus: Option<String>,
    pub motherboards: Option<String>,
    pub memory: Option<String>,
    pub psus: Option<String>,
    pub check: Option<String>,
}

impl EndpointsConfig {
    fn list_overrides(&self) -> [(ComponentCategory, &Option<String>); 5] {
        [
            (ComponentCategory::Cpu, &self.cpus),
            (ComponentCategory::Gpu, &self.gpus),
            (ComponentCategory::Motherboard, &self.motherboards),
            (ComponentCategory::Memory, &self.memory),
            (ComponentCategory::Psu, &self.psus),
        ]
    }

    fn all_paths(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        let lists = self
            .list_overrides()
            .into_iter()
            .filter_map(|(category, path)| {
                path.as_deref()
                    .map(|p| (category.default_endpoint().trim_start_matches("/api/"), p))
            });
        lists.chain(self.check.as_deref().map(|p| ("check", p)))
    }

    fn to_endpoints(&self) -> Endpoints {
        let mut endpoints = Endpoints::new();
        for (category, path) in self.list_overrides() {
            if let Some(path) = path {
                endpoints = endpoints.with_list(category, path.clone());
            }
        }
        if let Some(check) = &self.check {
            endpoints = endpoints.with_check(check.clone());
        }
        endpoints
    }
}

/// Effective settings after merging command line, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub endpoints: Endpoints,
    pub widget: WidgetOptions,
}

impl Settings {
    /// Merges the sources: command line first, then the config file, then defaults.
    pub fn resolve(cli_base_url: Option<&str>, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();
        let base_url = cli_base_url
            .map(str::to_string)
            .or(config.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            endpoints: config
                .endpoints
                .as_ref()
                .map(EndpointsConfig::to_endpoints)
                .unwrap_or_default(),
            widget: config.widget.unwrap_or_default(),
        }
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
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "config file loaded");

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
    if let Some(endpoints) = &config.endpoints {
        for (name, path) in endpoints.all_paths() {
            if !path.starts_with('/') {
                return Err(CheckerError::Config {
                    message: format!("endpoints.{} must start with '/' (got \"{}\")", name, path),
                    hint: "Endpoint paths are resolved against base_url, e.g. \"/api/cpus\""
                        .to_string(),
                }
                .into());
            }
        }
    }

    if let Some(widget) = &config.widget {
        if widget.search_result_limit == 0 {
            return Err(CheckerError::Config {
                message: "widget.search_result_limit must be greater than 0".to_string(),
                hint: "Remove the field to use the default of 100".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
