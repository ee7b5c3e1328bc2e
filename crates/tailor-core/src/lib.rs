//! Tailor Core Library
//!
//! Configuration types, content globs, theme mapping, the plugin capability
//! and error handling for the Tailor utility-CSS build configuration.

pub mod config;
pub mod content;
pub mod error;
pub mod plugin;
pub mod raw;
pub mod theme;

pub use config::Config;
pub use content::{ContentGlob, ContentMatcher};
pub use error::{CoreError, Result};
pub use plugin::{ClassPlugin, PluginHandle, PluginResolver, PluginSpec};
pub use raw::{ConfigFormat, RawConfig};
pub use theme::Theme;
