//! Structural navigation: the sidebar as a mirror of the content tree.
//!
//! ## Ordering
//!
//! Within every directory:
//!
//! 1. `index`/`readme` files (any case) come first
//! 2. then subdirectories
//! 3. then the remaining files
//!
//! Each partition is ordered with [`locale_cmp`](crate::naming::locale_cmp)
//! on the raw entry name, so numeric prefixes (`01-`, `02-`) control order
//! without showing up in labels. The ordering itself lives in
//! [`list_entries`], which the tag scan shares.
//!
//! ```text
//! guide/                   Guide
//! ├── README.md       →    ├── Guide Overview   /guide/
//! ├── advanced/            ├── Advanced
//! │   └── 01-tuning.md     │   └── Tuning       /guide/advanced/01-tuning
//! ├── 01-install.md        ├── Install          /guide/01-install
//! └── 02-configure.md      └── Configure        /guide/02-configure
//! ```
//!
//! Directories that end up with no items are dropped. A file whose link is
//! already taken by an earlier sibling is dropped too, which is how a
//! directory holding both `index.md` and `readme.md` resolves: `index` sorts
//! first and keeps the directory URL.

use crate::config::SiteConfig;
use crate::content::{list_entries, load_file};
use crate::links::child_base;
use crate::naming::dir_display_name;
use crate::source::{ContentSource, join};
use crate::types::{NavItem, contains_link};

/// Build the items for directory `dir`, whose URL is `base`.
pub fn walk_structure(
    source: &dyn ContentSource,
    dir: &str,
    base: &str,
    config: &SiteConfig,
) -> Vec<NavItem> {
    let Some(entries) = list_entries(source, dir, config) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for entry in entries {
        if entry.is_dir() {
            let children = walk_structure(
                source,
                &join(dir, &entry.name),
                &child_base(base, &entry.name),
                config,
            );
            if !children.is_empty() {
                items.push(NavItem::group(
                    dir_display_name(&entry.name),
                    config.collapsed,
                    children,
                ));
            }
        } else if let Some(file) = load_file(source, dir, &entry.name, base) {
            if contains_link(&items, &file.link) {
                tracing::debug!(path = %file.path, link = %file.link, "Link already taken by a sibling");
                continue;
            }
            items.push(NavItem::leaf(file.title, file.link));
        }
    }
    items
}
