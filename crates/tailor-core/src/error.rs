//! Error types for the Tailor core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Tailor.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A configuration file or glob pattern could not be parsed.
    #[error("Malformed syntax in {source_name}: {message}")]
    MalformedSyntax {
        source_name: String,
        message: String,
    },

    /// A field the configuration cannot do without is absent.
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// No plugin is registered under the referenced name.
    #[error("Unresolvable plugin reference: {0}")]
    UnresolvablePluginReference(String),

    /// A plugin factory rejected the options it was given.
    #[error("Invalid options for plugin {plugin}: {message}")]
    InvalidPluginOptions { plugin: String, message: String },

    /// Configuration file missing or of an unsupported kind.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Layered configuration error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new malformed syntax error.
    pub fn malformed(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::MalformedSyntax {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    /// Create a new missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingRequiredField(field.into())
    }

    /// Create a new unresolvable plugin error.
    pub fn unresolvable_plugin(name: impl Into<String>) -> Self {
        Self::UnresolvablePluginReference(name.into())
    }

    /// Create a new invalid plugin options error.
    pub fn plugin_options(plugin: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidPluginOptions {
            plugin: plugin.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("file not found");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_malformed_error() {
        let err = CoreError::malformed("tailor.toml", "expected `=`");
        assert!(err.to_string().contains("Malformed syntax"));
        assert!(err.to_string().contains("tailor.toml"));
        assert!(err.to_string().contains("expected `=`"));
    }

    #[test]
    fn test_missing_field_error() {
        let err = CoreError::missing_field("content");
        assert_eq!(err.to_string(), "Missing required field: content");
    }

    #[test]
    fn test_plugin_errors() {
        let err = CoreError::unresolvable_plugin("@acme/forms");
        assert!(err.to_string().contains("@acme/forms"));

        let err = CoreError::plugin_options("@tailwindcss/typography", "unknown field `color`");
        assert!(err.to_string().contains("Invalid options"));
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CoreError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
