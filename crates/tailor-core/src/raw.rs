//! Unresolved configuration as read from a file.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value as YamlValue};
use tracing::{debug, warn};

use crate::{
    config::Config,
    content::ContentGlob,
    error::{CoreError, Result},
    plugin::{PluginResolver, PluginSpec},
    theme::Theme,
};

/// On-disk configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml` files.
    Toml,
    /// `.yaml` / `.yml` files.
    Yaml,
}

impl ConfigFormat {
    /// Determine the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Determine the format from a file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Configuration whose globs are unchecked and whose plugins are unresolved.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawConfig {
    /// Content glob patterns; `None` when the key is absent.
    #[serde(default)]
    pub content: Option<Vec<String>>,

    /// Theme overrides and extensions.
    #[serde(default)]
    pub theme: Theme,

    /// Plugin references, in load order.
    #[serde(default)]
    pub plugins: Vec<PluginSpec>,
}

impl RawConfig {
    /// Parse configuration text. `source_name` labels errors.
    pub fn parse(text: &str, format: ConfigFormat, source_name: &str) -> Result<Self> {
        match format {
            ConfigFormat::Toml => {
                toml::from_str(text).map_err(|e| CoreError::malformed(source_name, e))
            }
            ConfigFormat::Yaml => {
                let value: YamlValue = serde_yaml::from_str(text)
                    .map_err(|e| CoreError::malformed(source_name, e))?;
                serde_yaml::from_value(stringify_keys(value))
                    .map_err(|e| CoreError::malformed(source_name, e))
            }
        }
    }

    /// Check required fields, compile globs and resolve plugins in order.
    pub fn resolve(self, resolver: &dyn PluginResolver) -> Result<Config> {
        let patterns = self
            .content
            .ok_or_else(|| CoreError::missing_field("content"))?;

        if patterns.is_empty() {
            warn!("content is empty; no files will be scanned for classes");
        }

        let content = patterns
            .into_iter()
            .map(ContentGlob::new)
            .collect::<Result<Vec<_>>>()?;

        let plugins = self
            .plugins
            .iter()
            .map(|spec| {
                debug!(plugin = spec.name(), "resolving plugin");
                resolver.resolve(spec)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Config::new(content, self.theme, plugins))
    }
}

/// Rewrite scalar mapping keys as strings, so `128: 32rem` reads the same
/// as TOML's `128 = "32rem"`.
fn stringify_keys(value: YamlValue) -> YamlValue {
    match value {
        YamlValue::Mapping(mapping) => YamlValue::Mapping(
            mapping
                .into_iter()
                .map(|(key, value)| (stringify_key(key), stringify_keys(value)))
                .collect::<Mapping>(),
        ),
        YamlValue::Sequence(items) => {
            YamlValue::Sequence(items.into_iter().map(stringify_keys).collect())
        }
        other => other,
    }
}

fn stringify_key(key: YamlValue) -> YamlValue {
    match key {
        YamlValue::Number(n) => YamlValue::String(n.to_string()),
        YamlValue::Bool(b) => YamlValue::String(b.to_string()),
        other => other,
    }
}
