//! Plugin capability and handles.
//!
//! A configuration never loads plugins itself. It stores [`PluginHandle`]s
//! that a [`PluginResolver`] produced from [`PluginSpec`]s beforehand.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use toml::Table;

use crate::error::Result;

/// Capability implemented by every class-generation plugin.
pub trait ClassPlugin: fmt::Debug + Send + Sync {
    /// Package name the plugin is registered under.
    fn name(&self) -> &str;

    /// Effective options, defaults included.
    fn options(&self) -> Table {
        Table::new()
    }
}

/// Shared, pre-resolved reference to a plugin.
#[derive(Clone)]
pub struct PluginHandle(Arc<dyn ClassPlugin>);

impl PluginHandle {
    /// Wrap a plugin instance.
    pub fn new(plugin: impl ClassPlugin + 'static) -> Self {
        Self(Arc::new(plugin))
    }

    /// Package name of the plugin.
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Effective options of the plugin.
    pub fn options(&self) -> Table {
        self.0.options()
    }

    /// Borrow the underlying plugin.
    pub fn plugin(&self) -> &dyn ClassPlugin {
        self.0.as_ref()
    }
}

impl fmt::Debug for PluginHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PluginHandle").field(&self.0).finish()
    }
}

impl PartialEq for PluginHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.name() == other.name() && self.options() == other.options())
    }
}

/// Unresolved plugin reference as written in a configuration file.
///
/// Either a bare package name or a table with `name` and `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginSpec {
    /// `"@tailwindcss/typography"`
    Name(String),
    /// `{ name = "@tailwindcss/typography", options = { className = "wysiwyg" } }`
    WithOptions {
        name: String,
        #[serde(default)]
        options: Table,
    },
}

impl PluginSpec {
    /// Reference a plugin by name with default options.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Package name being referenced.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::WithOptions { name, .. } => name,
        }
    }

    /// Options passed to the plugin factory.
    pub fn options(&self) -> Table {
        match self {
            Self::Name(_) => Table::new(),
            Self::WithOptions { options, .. } => options.clone(),
        }
    }
}

impl From<&str> for PluginSpec {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

/// Turns plugin references into handles.
pub trait PluginResolver {
    /// Resolve a single reference.
    fn resolve(&self, spec: &PluginSpec) -> Result<PluginHandle>;
}
