//! Shared per-entry handling for both walkers.
//!
//! The structural walk and the tag scan agree on which entries exist (hidden
//! names and non-markup files are invisible) and on what a post looks like
//! once loaded: its link, its display title and its tags. Both rules live
//! here so the two trees can never disagree about a file.
//!
//! Failures are never fatal. An unreadable directory lists as nothing, an
//! unreadable file loads as nothing, and a malformed frontmatter block loads
//! as a file with no metadata. Each case is logged.

use std::cmp::Ordering;

use crate::config::SiteConfig;
use crate::frontmatter::{self, Metadata};
use crate::links::{is_index_name, resolve_link};
use crate::naming::{display_name, locale_cmp};
use crate::source::{ContentSource, Entry, EntryKind, join};

/// A markup file, loaded and resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    /// Root-relative path, `/`-separated.
    pub path: String,
    pub link: String,
    /// Frontmatter title, or the cleaned file name.
    pub title: String,
    pub tags: Vec<String>,
}

/// Visible entries of `dir` in walk order: hidden names and non-markup files
/// removed, index files first, then directories, then the remaining files.
///
/// Both walkers see the same order, so when two files resolve to one link
/// (`index.md` and `README.md`) the same file wins in both trees.
///
/// Returns `None` (after logging) when the directory cannot be listed.
pub fn list_entries(
    source: &dyn ContentSource,
    dir: &str,
    config: &SiteConfig,
) -> Option<Vec<Entry>> {
    match source.list(dir) {
        Ok(entries) => {
            let mut visible: Vec<Entry> = entries
                .into_iter()
                .filter(|e| !config.is_hidden(&e.name))
                .filter(|e| e.is_dir() || config.is_markup(&e.name))
                .collect();
            visible.sort_by(walk_order);
            Some(visible)
        }
        Err(e) => {
            tracing::warn!(dir = %display_dir(dir), error = %e, "Skipping unreadable directory");
            None
        }
    }
}

/// Read a markup file and derive its link, title and tags.
///
/// Returns `None` (after logging) when the file cannot be read.
pub fn load_file(
    source: &dyn ContentSource,
    dir: &str,
    name: &str,
    base: &str,
) -> Option<ContentFile> {
    let path = join(dir, name);
    let bytes = match source.read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "Skipping unreadable file");
            return None;
        }
    };

    let metadata = frontmatter::parse(&bytes).unwrap_or_else(|e| {
        tracing::warn!(path = %path, error = %e, "Failed to parse frontmatter");
        Metadata::default()
    });

    Some(ContentFile {
        link: resolve_link(name, base),
        title: metadata.title().unwrap_or_else(|| display_name(name)),
        tags: metadata.tags(),
        path,
    })
}

fn rank(entry: &Entry) -> u8 {
    match entry.kind {
        EntryKind::File if is_index_name(&entry.name) => 0,
        EntryKind::Dir => 1,
        EntryKind::File => 2,
    }
}

fn walk_order(a: &Entry, b: &Entry) -> Ordering {
    rank(a)
        .cmp(&rank(b))
        .then_with(|| locale_cmp(&a.name, &b.name))
}

fn display_dir(dir: &str) -> &str {
    if dir.is_empty() { "." } else { dir }
}
