//! Shared test utilities for the simple-blog test suite.
//!
//! Provides tree builders, lookup helpers and shape assertions over
//! [`NavItem`] lists.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let src = memory_tree(&[
//!     ("guide/index.md", ""),
//!     ("guide/setup.md", ""),
//! ]);
//! let nav = build_navigation(&src, &SiteConfig::default());
//!
//! let guide = find_group(&nav.items, "Guide");
//! assert_eq!(leaf_links(guide.items()), vec!["/guide/", "/guide/setup"]);
//! ```

use crate::source::MemorySource;
use crate::types::NavItem;

// =========================================================================
// Fixture setup
// =========================================================================

/// Build an in-memory content tree from `(path, contents)` pairs.
pub fn memory_tree(files: &[(&str, &str)]) -> MemorySource {
    files
        .iter()
        .fold(MemorySource::new(), |src, (path, contents)| {
            src.with_file(path, *contents)
        })
}

/// Frontmatter document with a title and comma-separated tags.
pub fn post(title: &str, tags: &str) -> String {
    format!("---\ntitle: {title}\ntags: {tags}\n---\n\nBody.\n")
}

// =========================================================================
// Lookups (panic with a clear message on miss)
// =========================================================================

/// Find a group by text among siblings. Panics if not found.
pub fn find_group<'a>(items: &'a [NavItem], text: &str) -> &'a NavItem {
    items
        .iter()
        .find(|i| i.is_group() && i.text() == text)
        .unwrap_or_else(|| panic!("group '{text}' not found. Available: {:?}", texts(items)))
}

/// Follow a path of group texts from a sibling list.
pub fn find_path<'a>(items: &'a [NavItem], path: &[&str]) -> &'a NavItem {
    let (first, rest) = path.split_first().expect("path must not be empty");
    rest.iter()
        .fold(find_group(items, first), |group, text| {
            find_group(group.items(), text)
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Display texts in order.
pub fn texts(items: &[NavItem]) -> Vec<&str> {
    items.iter().map(|i| i.text()).collect()
}

/// Links of leaves in order; groups are skipped.
pub fn leaf_links(items: &[NavItem]) -> Vec<&str> {
    items.iter().filter_map(|i| i.link()).collect()
}

/// Count every leaf in a tree.
pub fn count_leaves(items: &[NavItem]) -> usize {
    items
        .iter()
        .map(|i| if i.is_group() { count_leaves(i.items()) } else { 1 })
        .sum()
}

// =========================================================================
// Shape assertions
// =========================================================================

/// Assert that a sibling list has exactly these texts, and that groups are
/// never empty anywhere below it.
pub fn assert_texts(items: &[NavItem], expected: &[&str]) {
    assert_eq!(texts(items), expected.to_vec(), "sibling texts mismatch");
    assert_no_empty_groups(items);
}

pub fn assert_no_empty_groups(items: &[NavItem]) {
    for item in items {
        if item.is_group() {
            assert!(
                !item.items().is_empty(),
                "group '{}' is empty",
                item.text()
            );
            assert_no_empty_groups(item.items());
        }
    }
}
