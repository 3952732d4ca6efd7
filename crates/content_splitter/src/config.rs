// crates/content_splitter/src/config.rs

use anyhow::{Context, Result};
use read_more_tag::DEFAULT_READ_MORE_TAG;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// User-supplied plugin options, as the host hands them over.
///
/// Keys follow the host's camelCase convention (`readMoreTag`); unknown keys
/// are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadMoreOptions {
    /// Overrides the default `<!--more-->` marker. `None` or an empty string
    /// falls back to the default.
    pub read_more_tag: Option<String>,
}

impl ReadMoreOptions {
    /// Parses options from a JSON object such as `{"readMoreTag": "<!--cut-->"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse read-more options as JSON")
    }

    /// Reads and parses a JSON options file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Invalid options file {}", path.display()))
    }

    pub fn with_read_more_tag(mut self, tag: impl Into<String>) -> Self {
        self.read_more_tag = Some(tag.into());
        self
    }

    /// Applies the defaults. See [`resolve_config`].
    pub fn resolve(&self) -> ReadMoreConfig {
        let tag = match self.read_more_tag.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => DEFAULT_READ_MORE_TAG,
        };
        ReadMoreConfig {
            read_more_tag: tag.to_string(),
        }
    }
}

/// Effective configuration after defaults have been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadMoreConfig {
    read_more_tag: String,
}

impl ReadMoreConfig {
    /// The marker, taken verbatim from the options (never empty).
    pub fn read_more_tag(&self) -> &str {
        &self.read_more_tag
    }
}

impl Default for ReadMoreConfig {
    fn default() -> Self {
        ReadMoreOptions::default().resolve()
    }
}

/// Resolves optional user options into the effective configuration.
///
/// Missing options behave exactly like empty ones. Any non-empty tag is
/// accepted as-is: no trimming, escaping or pattern semantics.
pub fn resolve_config(options: Option<&ReadMoreOptions>) -> ReadMoreConfig {
    options.map(ReadMoreOptions::resolve).unwrap_or_default()
}
