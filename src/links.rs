//! Path-to-URL mapping for content files.
//!
//! URLs mirror the content tree with extensions dropped:
//!
//! ```text
//! content/guide/setup.md   →  /guide/setup
//! content/guide/index.md   →  /guide/
//! content/guide/README.md  →  /guide/
//! content/index.md         →  /
//! ```
//!
//! Directory bases always end with `/`; file links never gain a trailing
//! slash of their own.

use crate::naming::strip_extension;

/// Base names that stand in for their directory.
const INDEX_NAMES: &[&str] = &["index", "readme"];

/// Marker URL for the site root.
pub const SITE_ROOT: &str = "/";

/// Whether a file name (with or without extension) is an index/readme page.
pub fn is_index_name(file_name: &str) -> bool {
    let stem = strip_extension(file_name);
    INDEX_NAMES.iter().any(|n| stem.eq_ignore_ascii_case(n))
}

/// Canonical URL of a file inside a directory whose URL is `base`.
pub fn resolve_link(file_name: &str, base: &str) -> String {
    if is_index_name(file_name) {
        if base.is_empty() || base == SITE_ROOT {
            SITE_ROOT.to_string()
        } else {
            base.to_string()
        }
    } else {
        format!("{}{}", base, strip_extension(file_name))
    }
}

/// URL base for a subdirectory named `name` inside `base`.
pub fn child_base(base: &str, name: &str) -> String {
    format!("{}{}/", base, name)
}
