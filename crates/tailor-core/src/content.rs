//! Content globs and path matching.
//!
//! A content glob selects the source files the build driver scans for
//! utility-class usage. Patterns are written relative to the project root
//! (`./_posts/**/*.{html,md}`) and support `*`, `**`, `?`, character classes
//! and `{a,b}` alternation. A leading `!` excludes whatever the pattern
//! matches from earlier globs.
//!
//! Nothing here touches the filesystem: matching files are never required to
//! exist and walking the tree is left to the consumer.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use ignore::overrides::{Override, OverrideBuilder};
use tracing::{debug, warn};

use crate::error::{CoreError, Result};

/// A single validated content glob.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentGlob {
    pattern: String,
}

impl ContentGlob {
    /// Parse and validate a glob pattern.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();

        if pattern.trim().is_empty() {
            return Err(CoreError::malformed("content", "glob pattern cannot be empty"));
        }

        let glob = Self { pattern };
        if glob.is_absolute() {
            warn!(pattern = %glob.pattern, "content glob is an absolute path");
        }

        // Compile once so syntax errors surface at configuration time.
        let line = glob.anchored(None)?;
        OverrideBuilder::new(".")
            .add(&line)
            .map_err(|e| glob.malformed(e))?;

        Ok(glob)
    }

    /// Construct a glob from a literal pattern without validating it.
    ///
    /// Syntax errors in such a pattern surface from [`ContentMatcher::new`].
    pub fn from_static(pattern: &'static str) -> Self {
        Self {
            pattern: pattern.to_string(),
        }
    }

    /// The pattern exactly as written.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern excludes paths instead of selecting them.
    pub fn is_negated(&self) -> bool {
        self.pattern.starts_with('!')
    }

    fn body(&self) -> &str {
        self.pattern.strip_prefix('!').unwrap_or(&self.pattern)
    }

    fn is_absolute(&self) -> bool {
        Path::new(self.body()).is_absolute()
    }

    fn malformed(&self, message: impl ToString) -> CoreError {
        CoreError::malformed(format!("content glob `{}`", self.pattern), message)
    }

    /// Rewrite the pattern into gitignore form, anchored at the matcher root.
    ///
    /// `./index.html` must only match the root `index.html`, never
    /// `_site/index.html`, so every pattern gets a leading `/`. An absolute
    /// pattern is made relative to `root` and must lie beneath it; with no
    /// root it is only checked for syntax.
    fn anchored(&self, root: Option<&Path>) -> Result<String> {
        let mut body = self.body();
        while let Some(rest) = body.strip_prefix("./") {
            body = rest;
        }

        let relative = match root {
            Some(root) if Path::new(body).is_absolute() => Path::new(body)
                .strip_prefix(root)
                .map_err(|_| {
                    self.malformed(format!(
                        "absolute pattern is outside the content root {}",
                        root.display()
                    ))
                })?
                .to_string_lossy()
                .into_owned(),
            _ => body.trim_start_matches('/').to_string(),
        };

        let prefix = if self.is_negated() { "!" } else { "" };
        Ok(format!("{prefix}/{relative}"))
    }
}

impl fmt::Display for ContentGlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl AsRef<str> for ContentGlob {
    fn as_ref(&self) -> &str {
        &self.pattern
    }
}

/// Compiled set of content globs rooted at a directory.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    root: PathBuf,
    overrides: Override,
}

impl ContentMatcher {
    /// Compile `globs` into a matcher rooted at `root`.
    pub fn new<'a>(
        root: impl Into<PathBuf>,
        globs: impl IntoIterator<Item = &'a ContentGlob>,
    ) -> Result<Self> {
        let root = root.into();
        let mut builder = OverrideBuilder::new(&root);

        let mut count = 0usize;
        for glob in globs {
            let line = glob.anchored(Some(root.as_path()))?;
            builder.add(&line).map_err(|e| glob.malformed(e))?;
            count += 1;
        }

        let overrides = builder
            .build()
            .map_err(|e| CoreError::malformed("content", e))?;

        debug!(root = %root.display(), globs = count, "compiled content matcher");
        Ok(Self { root, overrides })
    }

    /// The directory patterns are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the file at `path` is selected for scanning.
    ///
    /// `path` may be relative to the root or an absolute path beneath it.
    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        self.overrides.matched(path.as_ref(), false).is_whitelist()
    }
}
