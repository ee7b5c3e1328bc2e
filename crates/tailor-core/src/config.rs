//! Build configuration management.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    content::{ContentGlob, ContentMatcher},
    error::{CoreError, Result},
    plugin::{PluginHandle, PluginResolver},
    raw::{ConfigFormat, RawConfig},
    theme::Theme,
};

/// Prefix for environment overrides, e.g. `TAILOR__CONTENT`.
pub const ENV_PREFIX: &str = "TAILOR";

/// Immutable build configuration handed to the class-generation driver.
///
/// Built once at startup and shared by reference afterwards. Plugin handles
/// are reference counted, so cloning is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    content: Vec<ContentGlob>,
    theme: Theme,
    plugins: Vec<PluginHandle>,
}

impl Config {
    /// Assemble a configuration from already validated parts.
    pub fn new(content: Vec<ContentGlob>, theme: Theme, plugins: Vec<PluginHandle>) -> Self {
        Self {
            content,
            theme,
            plugins,
        }
    }

    /// Load configuration from a TOML or YAML file.
    pub fn from_file(path: &Path, resolver: &dyn PluginResolver) -> Result<Self> {
        let format = detect_format(path)?;

        let text = std::fs::read_to_string(path)?;
        let raw = RawConfig::parse(&text, format, &path.display().to_string())?;

        debug!(path = %path.display(), "loaded configuration file");
        raw.resolve(resolver)
    }

    /// Load configuration from a file layered with `TAILOR__*` environment
    /// variables. `TAILOR__CONTENT` is read as a comma-separated list.
    pub fn from_file_with_env(path: &Path, resolver: &dyn PluginResolver) -> Result<Self> {
        Self::layered(path, env_source(), resolver)
    }

    /// Like [`Config::from_file_with_env`], reading variables from `vars`
    /// instead of the process environment.
    pub fn from_file_with_env_vars<I>(
        path: &Path,
        vars: I,
        resolver: &dyn PluginResolver,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = env_source().source(Some(vars.into_iter().collect()));
        Self::layered(path, env, resolver)
    }

    fn layered(
        path: &Path,
        env: config::Environment,
        resolver: &dyn PluginResolver,
    ) -> Result<Self> {
        detect_format(path)?;

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(env)
            .build()?;

        let raw: RawConfig = settings.try_deserialize()?;

        debug!(path = %path.display(), "loaded layered configuration");
        raw.resolve(resolver)
    }

    /// Content globs in declaration order.
    pub fn content(&self) -> &[ContentGlob] {
        &self.content
    }

    /// Theme overrides and extensions.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Resolved plugins in load order.
    pub fn plugins(&self) -> &[PluginHandle] {
        &self.plugins
    }

    /// Find a plugin by package name.
    pub fn plugin(&self, name: &str) -> Option<&PluginHandle> {
        self.plugins.iter().find(|p| p.name() == name)
    }

    /// Compile the content globs into a matcher rooted at `root`.
    pub fn content_matcher(&self, root: impl Into<PathBuf>) -> Result<ContentMatcher> {
        ContentMatcher::new(root, &self.content)
    }
}

fn detect_format(path: &Path) -> Result<ConfigFormat> {
    if !path.exists() {
        return Err(CoreError::config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    ConfigFormat::from_path(path).ok_or_else(|| {
        CoreError::config(format!(
            "Unsupported configuration format: {}",
            path.display()
        ))
    })
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("content")
}
