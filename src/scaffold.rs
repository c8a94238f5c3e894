//! `new-post`: create a post file with templated frontmatter.
//!
//! Posts are filed by date under the content root:
//!
//! ```text
//! content/2025/may/hello-world.md
//! ---
//! title: Hello World!
//! date: 2025-05-01
//! tags:
//! - tag1
//! - tag2
//! ---
//!
//! Write your post here.
//! ```
//!
//! Creation is all-or-nothing for the post file: an existing post is never
//! overwritten, and a failed write removes what it started.

use chrono::NaiveDate;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::ScaffoldConfig;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("a post title is required")]
    MissingTitle,
    #[error("title {0:?} has no characters usable in a file name")]
    InvalidTitle(String),
    #[error("a post already exists at {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Serialize)]
struct PostFrontMatter<'a> {
    title: &'a str,
    date: String,
    tags: &'a [String],
}

/// URL-safe slug for a title: `"Hello World!"` → `"hello-world"`.
pub fn slugify(title: &str) -> String {
    slug::slugify(title)
}

/// Destination of a post: `<root>/<year>/<month name>/<slug>.md`.
pub fn post_path(root: &Path, title: &str, date: NaiveDate) -> Result<PathBuf, ScaffoldError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ScaffoldError::MissingTitle);
    }
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(ScaffoldError::InvalidTitle(title.to_string()));
    }
    Ok(root
        .join(date.format("%Y").to_string())
        .join(date.format("%B").to_string().to_lowercase())
        .join(format!("{slug}.md")))
}

/// Full text of a new post.
pub fn render_post(
    title: &str,
    date: NaiveDate,
    config: &ScaffoldConfig,
) -> Result<String, ScaffoldError> {
    let front = serde_yaml::to_string(&PostFrontMatter {
        title: title.trim(),
        date: date.format("%Y-%m-%d").to_string(),
        tags: &config.placeholder_tags,
    })?;
    Ok(format!("---\n{front}---\n\n{}\n", config.placeholder_body))
}

/// Create a post for `title` dated `date` under `root`.
///
/// Returns the created path. Fails without touching an existing file.
pub fn create_post(
    root: &Path,
    title: &str,
    date: NaiveDate,
    config: &ScaffoldConfig,
) -> Result<PathBuf, ScaffoldError> {
    let path = post_path(root, title, date)?;
    if path.exists() {
        return Err(ScaffoldError::AlreadyExists(path));
    }
    let contents = render_post(title, date, config)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(ScaffoldError::AlreadyExists(path));
        }
        Err(e) => return Err(e.into()),
    };
    if let Err(e) = file.write_all(contents.as_bytes()).and_then(|_| file.sync_all()) {
        drop(file);
        if let Err(cleanup) = fs::remove_file(&path) {
            tracing::warn!(path = %path.display(), error = %cleanup, "Failed to remove partial post");
        }
        return Err(e.into());
    }

    tracing::info!(path = %path.display(), "Created post");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter;
    use tempfile::TempDir;

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(slugify("Hello World!"), "hello-world");
        assert_eq!(slugify("  Rust & WebAssembly  "), "rust-webassembly");
    }

    #[test]
    fn path_uses_year_and_lowercase_month() {
        let path = post_path(Path::new("content"), "Hello World!", may_first()).unwrap();
        assert_eq!(path, Path::new("content/2025/may/hello-world.md"));
    }

    #[test]
    fn blank_title_is_usage_error() {
        let result = post_path(Path::new("content"), "   ", may_first());
        assert!(matches!(result, Err(ScaffoldError::MissingTitle)));
    }

    #[test]
    fn punctuation_only_title_is_invalid() {
        let result = post_path(Path::new("content"), "!!!", may_first());
        assert!(matches!(result, Err(ScaffoldError::InvalidTitle(_))));
    }

    #[test]
    fn rendered_post_round_trips_through_frontmatter() {
        let text = render_post("Hello World!", may_first(), &ScaffoldConfig::default()).unwrap();
        assert!(text.starts_with("---\n"));
        assert!(text.ends_with("\n\nWrite your post here.\n"));

        let meta = frontmatter::parse(text.as_bytes()).unwrap();
        assert_eq!(meta.title().as_deref(), Some("Hello World!"));
        assert_eq!(meta.string("date").as_deref(), Some("2025-05-01"));
        assert_eq!(meta.tags(), vec!["tag1", "tag2"]);
    }

    #[test]
    fn awkward_titles_stay_literal() {
        let text = render_post("- not: a list #1", may_first(), &ScaffoldConfig::default())
            .unwrap();
        let meta = frontmatter::parse(text.as_bytes()).unwrap();
        assert_eq!(meta.title().as_deref(), Some("- not: a list #1"));
    }

    #[test]
    fn create_post_writes_file() {
        let tmp = TempDir::new().unwrap();
        let path = create_post(
            tmp.path(),
            "Hello World!",
            may_first(),
            &ScaffoldConfig::default(),
        )
        .unwrap();

        assert_eq!(path, tmp.path().join("2025/may/hello-world.md"));
        let meta = frontmatter::parse(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(meta.title().as_deref(), Some("Hello World!"));
        assert_eq!(meta.string("date").as_deref(), Some("2025-05-01"));
    }

    #[test]
    fn second_create_fails_and_keeps_first() {
        let tmp = TempDir::new().unwrap();
        let config = ScaffoldConfig::default();
        let path = create_post(tmp.path(), "Hello World!", may_first(), &config).unwrap();
        fs::write(&path, "edited").unwrap();

        let result = create_post(tmp.path(), "Hello World!", may_first(), &config);
        assert!(matches!(result, Err(ScaffoldError::AlreadyExists(p)) if p == path));
        assert_eq!(fs::read_to_string(&path).unwrap(), "edited");
    }

    #[test]
    fn uses_configured_placeholders() {
        let config = ScaffoldConfig {
            placeholder_tags: vec!["draft".to_string()],
            placeholder_body: "TBD".to_string(),
        };
        let text = render_post("T", may_first(), &config).unwrap();
        let meta = frontmatter::parse(text.as_bytes()).unwrap();
        assert_eq!(meta.tags(), vec!["draft"]);
        assert!(text.ends_with("\n\nTBD\n"));
    }
}
