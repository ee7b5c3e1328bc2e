//! Theme overrides and extensions.

use serde::{Deserialize, Serialize};
use toml::{Table, Value};

/// Theme section of the configuration.
///
/// Keys under `extend` are merged into the tool's default theme. Any other
/// top-level key replaces the default value for that key outright. Both
/// empty means the tool defaults apply unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Values merged into the default theme.
    #[serde(default)]
    pub extend: Table,

    /// Values replacing the default theme.
    #[serde(flatten)]
    pub overrides: Table,
}

impl Theme {
    /// Whether the theme leaves every tool default untouched.
    pub fn is_empty(&self) -> bool {
        self.extend.is_empty() && self.overrides.is_empty()
    }

    /// Look up an extension by dotted key, e.g. `colors.brand`.
    pub fn extension(&self, key: &str) -> Option<&Value> {
        lookup(&self.extend, key)
    }

    /// Look up an override by dotted key.
    pub fn override_value(&self, key: &str) -> Option<&Value> {
        lookup(&self.overrides, key)
    }
}

fn lookup<'a>(table: &'a Table, key: &str) -> Option<&'a Value> {
    let mut parts = key.split('.');
    let mut current = table.get(parts.next()?)?;
    for part in parts {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Theme::default().is_empty());
    }

    #[test]
    fn test_empty_extend_is_empty() {
        let theme: Theme = toml::from_str("extend = {}").unwrap();
        assert!(theme.is_empty());
    }

    #[test]
    fn test_extend_and_overrides() {
        let theme: Theme = toml::from_str(
            r##"
fontFamily = { sans = ["Inter", "sans-serif"] }

[extend.colors]
brand = "#0f766e"
"##,
        )
        .unwrap();

        assert!(!theme.is_empty());
        assert_eq!(
            theme.extension("colors.brand").and_then(Value::as_str),
            Some("#0f766e")
        );
        assert!(theme.override_value("fontFamily.sans").is_some());
        assert!(theme.overrides.get("extend").is_none());
    }

    #[test]
    fn test_lookup_missing_key() {
        let theme = Theme::default();
        assert!(theme.extension("colors").is_none());
        assert!(theme.override_value("").is_none());
    }
}
