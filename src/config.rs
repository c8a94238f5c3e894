//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content root (or is passed explicitly with `--config`) and is sparse:
//! user values are merged on top of the stock defaults, so a config file only
//! needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_url = "/"              # URL the content root is served under
//! include_tags = true         # Append the synthetic tags group
//! tags_label = "Tags"         # Label of the tags group
//! collapsed = true            # Default collapsed state of every group
//! hidden_prefix = "."         # Entries starting with this are skipped
//! markup_extensions = ["md"]  # Extensions treated as posts (case-insensitive)
//!
//! [scaffold]
//! placeholder_tags = ["tag1", "tag2"]
//! placeholder_body = "Write your post here."
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// URL base of the content root. Must start and end with `/`.
    pub base_url: String,
    /// Whether the sidebar ends with a tags group.
    pub include_tags: bool,
    /// Display text of the tags group.
    pub tags_label: String,
    /// Collapsed flag applied to every emitted group.
    pub collapsed: bool,
    /// Name prefix marking entries the walkers skip.
    pub hidden_prefix: String,
    /// File extensions (without the dot) that count as posts.
    pub markup_extensions: Vec<String>,
    /// Templates for `new-post`.
    pub scaffold: ScaffoldConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            include_tags: true,
            tags_label: "Tags".to_string(),
            collapsed: true,
            hidden_prefix: ".".to_string(),
            markup_extensions: vec!["md".to_string()],
            scaffold: ScaffoldConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must start and end with '/'".into(),
            ));
        }
        if self.tags_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "tags_label must not be empty".into(),
            ));
        }
        if self.hidden_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "hidden_prefix must not be empty".into(),
            ));
        }
        if self.markup_extensions.is_empty() {
            return Err(ConfigError::Validation(
                "markup_extensions must not be empty".into(),
            ));
        }
        if self
            .markup_extensions
            .iter()
            .any(|e| e.is_empty() || e.contains('.'))
        {
            return Err(ConfigError::Validation(
                "markup_extensions entries must be non-empty and given without the dot".into(),
            ));
        }
        Ok(())
    }

    /// Whether an entry name is hidden from both walkers.
    pub fn is_hidden(&self, name: &str) -> bool {
        name.starts_with(&self.hidden_prefix)
    }

    /// Whether a file name carries one of the markup extensions.
    pub fn is_markup(&self, name: &str) -> bool {
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => self
                .markup_extensions
                .iter()
                .any(|m| m.eq_ignore_ascii_case(ext)),
            _ => false,
        }
    }
}

/// Templates used when scaffolding a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Tags written into a new post's frontmatter.
    pub placeholder_tags: Vec<String>,
    /// Body line written after the frontmatter.
    pub placeholder_body: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            placeholder_tags: vec!["tag1".to_string(), "tag2".to_string()],
            placeholder_body: "Write your post here.".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a TOML file as a raw value. `Ok(None)` when the file does not exist.
pub fn load_raw_config(config_path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `config.toml` from the content root, falling back to stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    load_config_file(&root.join("config.toml"))
}

/// Load a specific config file, falling back to stock defaults if it is absent.
pub fn load_config_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(path)?)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Blog Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# URL the content root is served under. Must start and end with "/".
base_url = "/"

# Append a "Tags" group listing every tagged post, nested by folder.
include_tags = true

# Display text of the tags group.
tags_label = "Tags"

# Whether sidebar groups start collapsed.
collapsed = true

# Files and directories whose name starts with this prefix are skipped.
hidden_prefix = "."

# Extensions (without the dot) treated as posts. Matched case-insensitively.
markup_extensions = ["md"]

# ---------------------------------------------------------------------------
# new-post templates
# ---------------------------------------------------------------------------
[scaffold]
# Tags written into a freshly created post.
placeholder_tags = ["tag1", "tag2"]

# Body line written below the frontmatter.
placeholder_body = "Write your post here."
"##
}
