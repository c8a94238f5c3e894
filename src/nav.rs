//! The top-level entry point: content root in, [`Navigation`] out.
//!
//! ```text
//! content/
//! ├── index.md            (ignored: loose root file)
//! ├── guide/          →   Guide
//! ├── blog/           →   Blog        (groups sorted by text)
//! └── .vitepress/         (ignored: hidden)
//!                         Tags        (appended last, only if anything is tagged)
//! ```
//!
//! Generation never fails. Missing roots, unreadable entries and broken
//! frontmatter are logged and leave holes in the model instead of aborting.

use std::path::Path;

use crate::config::SiteConfig;
use crate::content::list_entries;
use crate::links::child_base;
use crate::naming::{dir_display_name, locale_cmp};
use crate::source::{ContentSource, FsSource};
use crate::tags::{scan_tags, structure_tags};
use crate::types::{NavItem, Navigation};
use crate::walk::walk_structure;

/// Build the sidebar for the whole content tree behind `source`.
pub fn build_navigation(source: &dyn ContentSource, config: &SiteConfig) -> Navigation {
    let base = config.base_url.as_str();
    let mut items = Vec::new();

    if let Some(entries) = list_entries(source, "", config) {
        for entry in entries.iter().filter(|e| e.is_dir()) {
            let children =
                walk_structure(source, &entry.name, &child_base(base, &entry.name), config);
            if !children.is_empty() {
                items.push(NavItem::group(
                    dir_display_name(&entry.name),
                    config.collapsed,
                    children,
                ));
            }
        }
    }
    items.sort_by(|a, b| locale_cmp(a.text(), b.text()));

    if config.include_tags {
        let tag_groups = structure_tags(&scan_tags(source, "", base, config), config);
        if !tag_groups.is_empty() {
            items.push(NavItem::group(
                config.tags_label.as_str(),
                config.collapsed,
                tag_groups,
            ));
        }
    }

    tracing::debug!(groups = items.len(), "Navigation built");
    Navigation {
        base: base.to_string(),
        items,
    }
}

/// [`build_navigation`] over a directory on disk.
pub fn build_navigation_at(root: &Path, config: &SiteConfig) -> Navigation {
    build_navigation(&FsSource::new(root), config)
}
