//! Tailor
//!
//! Build configuration for the utility-CSS step of a Jekyll-style site: which
//! content files are scanned for class names, which theme extensions apply and
//! which class-generation plugins are loaded.
//!
//! The configuration is an immutable value built once at startup and handed
//! to the build driver by reference.
//!
//! # Example
//!
//! ```
//! let config = tailor::load();
//!
//! assert_eq!(config.content().len(), 5);
//! assert!(config.theme().is_empty());
//! assert_eq!(config.plugins()[0].name(), "@tailwindcss/typography");
//! ```

use std::path::Path;

pub use tailor_core::{
    ClassPlugin, Config, ConfigFormat, ContentGlob, ContentMatcher, CoreError, PluginHandle,
    PluginResolver, PluginSpec, RawConfig, Result, Theme,
};
pub use tailor_plugins::{PluginRegistry, Typography, TypographyOptions};

/// Content globs scanned for class names, in declaration order.
pub const SITE_CONTENT: [&str; 5] = [
    "./_includes/**/*.{html,md}",
    "./_layouts/**/*.{html,md}",
    "./_pages/**/*.{html,md}",
    "./_posts/**/*.{html,md}",
    "./index.html",
];

/// The site's build configuration.
///
/// Content globs from [`SITE_CONTENT`], an empty theme extension and the
/// typography plugin with default options. Pure and infallible; every call
/// returns an equal value.
pub fn load() -> Config {
    let content = SITE_CONTENT
        .iter()
        .copied()
        .map(ContentGlob::from_static)
        .collect();

    Config::new(content, Theme::default(), vec![Typography::new().into_handle()])
}

/// Load a configuration file, resolving plugins with the bundled registry.
pub fn load_file(path: impl AsRef<Path>) -> Result<Config> {
    Config::from_file(path.as_ref(), &PluginRegistry::with_builtins())
}

/// Like [`load_file`], with `TAILOR__*` environment variables layered on top.
pub fn load_file_with_env(path: impl AsRef<Path>) -> Result<Config> {
    Config::from_file_with_env(path.as_ref(), &PluginRegistry::with_builtins())
}

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// tailor::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_is_complete() {
        let config = load();
        assert!(!config.content().is_empty());
        assert!(config.theme().is_empty());
        assert!(!config.plugins().is_empty());
    }

    #[test]
    fn test_load_content_globs() {
        let config = load();
        let patterns: Vec<_> = config.content().iter().map(ContentGlob::as_str).collect();
        assert_eq!(patterns, SITE_CONTENT);
        assert_eq!(config.content().len(), 5);
    }

    #[test]
    fn test_load_plugins() {
        let config = load();
        assert_eq!(config.plugins().len(), 1);
        assert_eq!(config.plugins()[0].name(), Typography::NAME);
        assert!(config.plugin(Typography::NAME).is_some());
    }

    #[test]
    fn test_load_is_idempotent() {
        assert_eq!(load(), load());
    }

    #[test]
    fn test_literal_globs_compile() {
        let matcher = load().content_matcher(".").unwrap();
        assert!(matcher.is_match("_posts/2024-05-01-welcome.md"));
        assert!(matcher.is_match("_includes/footer.html"));
        assert!(matcher.is_match("index.html"));
        assert!(!matcher.is_match("_config.yml"));
    }

    #[test]
    fn test_shared_across_threads() {
        let config = std::sync::Arc::new(load());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let config = std::sync::Arc::clone(&config);
                std::thread::spawn(move || config.content().len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 5);
        }
    }
}
