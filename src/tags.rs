//! Tag index and the per-tag navigation trees.
//!
//! Two steps:
//!
//! 1. [`scan_tags`] walks the content tree and collects a [`TagIndex`]: for
//!    every tag, the files that declare it. Each recursive call returns its
//!    own index and the caller merges it, so no mutable state is shared
//!    across the walk.
//! 2. [`structure_tags`] turns the index into one group per tag. Inside a tag
//!    the files are re-nested by their original folders rather than
//!    flattened, so browsing a tag looks like browsing the main tree with
//!    everything untagged removed:
//!
//! ```text
//! 2025/may/intro.md      (tags: tutorial)      Tutorial ── 2025 ─┬─ June ── Advanced
//! 2025/june/advanced.md  (tags: tutorial)                        └─ May ─── Intro
//! ```
//!
//! Tag names are kept as written (after trimming): `Rust` and `rust` are two
//! tags.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::config::SiteConfig;
use crate::content::{list_entries, load_file};
use crate::links::child_base;
use crate::naming::{dir_display_name, locale_cmp};
use crate::source::{ContentSource, join};
use crate::types::{NavItem, contains_link};

/// A file as recorded under one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedFile {
    pub link: String,
    pub text: String,
    /// Path relative to the scanned directory, `/`-separated.
    pub path: String,
}

/// Tag → files carrying it, deduplicated by link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: BTreeMap<String, Vec<TaggedFile>>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `file` under `tag`. Returns `false` if the tag already holds
    /// a file with the same link.
    pub fn insert(&mut self, tag: &str, file: TaggedFile) -> bool {
        let files = self.tags.entry(tag.to_string()).or_default();
        if files.iter().any(|f| f.link == file.link) {
            return false;
        }
        files.push(file);
        true
    }

    /// Combine two indexes; `self`'s entries come first within each tag.
    pub fn merge(mut self, other: TagIndex) -> TagIndex {
        for (tag, files) in other.tags {
            for file in files {
                self.insert(&tag, file);
            }
        }
        self
    }

    pub fn get(&self, tag: &str) -> Option<&[TaggedFile]> {
        self.tags.get(tag).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TaggedFile])> {
        self.tags.iter().map(|(t, f)| (t.as_str(), f.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Collect the tags of every markup file below `dir` (whose URL is `base`).
pub fn scan_tags(
    source: &dyn ContentSource,
    dir: &str,
    base: &str,
    config: &SiteConfig,
) -> TagIndex {
    scan_dir(source, dir, "", base, config)
}

/// `rel` is `dir` relative to the directory the scan started from.
fn scan_dir(
    source: &dyn ContentSource,
    dir: &str,
    rel: &str,
    base: &str,
    config: &SiteConfig,
) -> TagIndex {
    let Some(entries) = list_entries(source, dir, config) else {
        return TagIndex::new();
    };

    let mut index = TagIndex::new();
    for entry in entries {
        if entry.is_dir() {
            let sub = scan_dir(
                source,
                &join(dir, &entry.name),
                &join(rel, &entry.name),
                &child_base(base, &entry.name),
                config,
            );
            index = index.merge(sub);
        } else if let Some(file) = load_file(source, dir, &entry.name, base) {
            let tagged = TaggedFile {
                link: file.link,
                text: file.title,
                path: join(rel, &entry.name),
            };
            for tag in &file.tags {
                if !index.insert(tag, tagged.clone()) {
                    tracing::debug!(path = %tagged.path, tag = %tag, "Duplicate tag entry ignored");
                }
            }
        }
    }
    index
}

/// One group per tag, ordered by tag name, each nesting its files by folder.
pub fn structure_tags(index: &TagIndex, config: &SiteConfig) -> Vec<NavItem> {
    let mut tags: Vec<(&str, &[TaggedFile])> = index.iter().collect();
    tags.sort_by(|a, b| locale_cmp(a.0, b.0));

    tags.into_iter()
        .filter_map(|(tag, files)| {
            let mut items = Vec::new();
            for file in files {
                let segments: Vec<&str> = file.path.split('/').collect();
                let dirs = segments.split_last().map(|(_, d)| d).unwrap_or(&[]);
                insert_file(&mut items, dirs, file, config.collapsed);
            }
            if items.is_empty() {
                None
            } else {
                Some(NavItem::group(tag, config.collapsed, items))
            }
        })
        .collect()
}

/// Insert a leaf below the groups named by `dirs`, creating them as needed,
/// then re-sort every sibling list on the way back up.
fn insert_file(items: &mut Vec<NavItem>, dirs: &[&str], file: &TaggedFile, collapsed: bool) {
    match dirs.split_first() {
        None => {
            if !contains_link(items, &file.link) {
                items.push(NavItem::leaf(&file.text, &file.link));
            }
        }
        Some((segment, rest)) => {
            let text = dir_display_name(segment);
            let existing = items.iter().position(|i| i.is_group() && i.text() == text);
            let (pos, created) = match existing {
                Some(pos) => (pos, false),
                None => {
                    items.push(NavItem::group(text, collapsed, Vec::new()));
                    (items.len() - 1, true)
                }
            };
            let mut now_empty = false;
            if let NavItem::Group {
                items: children, ..
            } = &mut items[pos]
            {
                insert_file(children, rest, file, collapsed);
                now_empty = children.is_empty();
            }
            if created && now_empty {
                items.remove(pos);
            }
        }
    }
    items.sort_by(tag_tree_order);
}

fn tag_tree_order(a: &NavItem, b: &NavItem) -> Ordering {
    b.is_group()
        .cmp(&a.is_group())
        .then_with(|| locale_cmp(a.text(), b.text()))
}
