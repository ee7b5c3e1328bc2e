//! Typography plugin handle.
//!
//! Carries identity and options for the `@tailwindcss/typography` plugin.
//! Generating the `prose` classes is the build driver's job.

use serde::{Deserialize, Serialize};
use tailor_core::{ClassPlugin, CoreError, PluginHandle, Result};
use toml::{Table, Value};

/// Which selector strategy the generated classes use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Zero-specificity selectors.
    #[default]
    Modern,
    /// Plain descendant selectors for older browsers.
    Legacy,
}

impl Target {
    /// Option value as written in a configuration file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Legacy => "legacy",
        }
    }
}

/// Options accepted by the typography plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypographyOptions {
    /// Base class name, `prose` unless overridden.
    #[serde(default = "default_class_name")]
    pub class_name: String,

    #[serde(default)]
    pub target: Target,
}

fn default_class_name() -> String {
    "prose".to_string()
}

impl Default for TypographyOptions {
    fn default() -> Self {
        Self {
            class_name: default_class_name(),
            target: Target::default(),
        }
    }
}

/// The typography plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Typography {
    options: TypographyOptions,
}

impl Typography {
    /// Package name the plugin is registered under.
    pub const NAME: &'static str = "@tailwindcss/typography";

    /// Typography with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Typography with explicit options.
    pub fn with_options(options: TypographyOptions) -> Self {
        Self { options }
    }

    /// Build from an options table as written in a configuration file.
    pub fn from_table(table: &Table) -> Result<Self> {
        let options: TypographyOptions = Value::Table(table.clone())
            .try_into()
            .map_err(|e| CoreError::plugin_options(Self::NAME, e))?;

        if options.class_name.trim().is_empty() {
            return Err(CoreError::plugin_options(
                Self::NAME,
                "className cannot be empty",
            ));
        }

        Ok(Self { options })
    }

    /// Effective options.
    pub fn typography_options(&self) -> &TypographyOptions {
        &self.options
    }

    /// Wrap into a shareable handle.
    pub fn into_handle(self) -> PluginHandle {
        PluginHandle::new(self)
    }
}

impl ClassPlugin for Typography {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn options(&self) -> Table {
        let mut table = Table::new();
        table.insert("className".into(), self.options.class_name.clone().into());
        table.insert("target".into(), self.options.target.as_str().into());
        table
    }
}
