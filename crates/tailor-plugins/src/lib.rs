//! Tailor Plugins Library
//!
//! Plugin registry and the bundled plugin handles.
//!
//! # Modules
//!
//! - [`registry`] - Name to factory mapping, implements `PluginResolver`
//! - [`typography`] - The `@tailwindcss/typography` handle and its options

pub mod registry;
pub mod typography;

pub use registry::{PluginFactory, PluginRegistry};
pub use typography::{Target, Typography, TypographyOptions};
