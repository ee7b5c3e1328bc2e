//! Plugin registry.
//!
//! Maps package names to factories that build [`PluginHandle`]s from the
//! options table written next to the name in a configuration file.

use std::{collections::BTreeMap, fmt};

use tailor_core::{CoreError, PluginHandle, PluginResolver, PluginSpec, Result};
use toml::Table;
use tracing::debug;

use crate::typography::Typography;

/// Builds a plugin handle from its options.
pub type PluginFactory = Box<dyn Fn(&Table) -> Result<PluginHandle> + Send + Sync>;

/// Registry of known plugins.
pub struct PluginRegistry {
    factories: BTreeMap<String, PluginFactory>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Create a registry with the bundled plugins.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Typography::NAME, |options| {
            Typography::from_table(options).map(Typography::into_handle)
        });
        registry
    }

    /// Register a factory under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&Table) -> Result<PluginHandle> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.insert(name.clone(), Box::new(factory)).is_some() {
            debug!(plugin = %name, "replaced plugin factory");
        }
        self
    }

    /// Whether a plugin is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl PluginResolver for PluginRegistry {
    fn resolve(&self, spec: &PluginSpec) -> Result<PluginHandle> {
        let factory = self
            .factories
            .get(spec.name())
            .ok_or_else(|| CoreError::unresolvable_plugin(spec.name()))?;

        let handle = factory(&spec.options())?;
        debug!(plugin = handle.name(), "resolved plugin");
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use tailor_core::ClassPlugin;

    use super::*;

    #[derive(Debug)]
    struct AspectRatio;

    impl ClassPlugin for AspectRatio {
        fn name(&self) -> &str {
            "@tailwindcss/aspect-ratio"
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = PluginRegistry::new();
        assert_eq!(registry.names().count(), 0);

        let err = registry.resolve(&Typography::NAME.into()).unwrap_err();
        assert!(matches!(err, CoreError::UnresolvablePluginReference(_)));
    }

    #[test]
    fn test_builtins() {
        let registry = PluginRegistry::with_builtins();
        assert!(registry.contains("@tailwindcss/typography"));
        assert_eq!(registry.names().collect::<Vec<_>>(), ["@tailwindcss/typography"]);

        let handle = registry.resolve(&"@tailwindcss/typography".into()).unwrap();
        assert_eq!(handle, Typography::new().into_handle());
    }

    #[test]
    fn test_resolve_with_options() {
        let registry = PluginRegistry::default();
        let spec: PluginSpec = toml::from_str(
            r#"
name = "@tailwindcss/typography"
options = { className = "wysiwyg" }
"#,
        )
        .unwrap();

        let handle = registry.resolve(&spec).unwrap();
        assert_eq!(
            handle.options().get("className").and_then(toml::Value::as_str),
            Some("wysiwyg")
        );
    }

    #[test]
    fn test_resolve_rejects_bad_options() {
        let registry = PluginRegistry::default();
        let spec: PluginSpec = toml::from_str(
            r#"
name = "@tailwindcss/typography"
options = { unknown = true }
"#,
        )
        .unwrap();

        let err = registry.resolve(&spec).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPluginOptions { .. }));
    }

    #[test]
    fn test_register_custom() {
        let mut registry = PluginRegistry::with_builtins();
        registry.register("@tailwindcss/aspect-ratio", |_| Ok(PluginHandle::new(AspectRatio)));

        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            ["@tailwindcss/aspect-ratio", "@tailwindcss/typography"]
        );
        let handle = registry.resolve(&"@tailwindcss/aspect-ratio".into()).unwrap();
        assert_eq!(handle.name(), "@tailwindcss/aspect-ratio");
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = PluginRegistry::with_builtins();
        assert!(format!("{registry:?}").contains("@tailwindcss/typography"));
    }
}
