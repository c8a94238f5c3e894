//! Filename cleaning and name collation.
//!
//! Every label in the sidebar that does not come from frontmatter is derived
//! from a raw filesystem name. Files and directories may carry an ordering
//! prefix (`01-`, `020_`) that controls how they sit on disk but should not
//! leak into the navigation:
//!
//! - `01-my_post-name.md` → "My Post Name"
//! - `getting-started/` → "Getting Started"
//! - `v1.2/` → "V1.2" (directories have no extension)
//! - `README.md` → "Readme"
//! - `2025/` → "2025" (no separator, so not a prefix)
//!
//! [`locale_cmp`] is the single ordering used for every sort in the crate, so
//! the structural tree, the tag tree and the top-level groups agree on what
//! "alphabetical" means.

use std::cmp::Ordering;

/// Characters treated as word separators in raw names.
const SEPARATORS: [char; 2] = ['-', '_'];

/// Strip a trailing `.ext` from a name.
///
/// A leading dot is not an extension (`.md` stays `.md`), and neither is a
/// trailing bare dot.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < name.len() => &name[..pos],
        _ => name,
    }
}

/// Strip one leading ordering prefix: `digits + separator` or a lone separator.
///
/// - `"01-intro"` → `"intro"`
/// - `"_drafts"` → `"drafts"`
/// - `"2025"` → `"2025"` (digits without a separator are kept)
pub fn strip_order_prefix(name: &str) -> &str {
    let digits = name.len()
        - name
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .len();
    let rest = &name[digits..];
    match rest.chars().next() {
        Some(c) if SEPARATORS.contains(&c) => &rest[c.len_utf8()..],
        _ => name,
    }
}

/// Human-readable label for a raw file name.
///
/// Falls back to the raw name when cleaning leaves nothing (`"001-"`, `".md"`).
pub fn display_name(raw: &str) -> String {
    clean_name(raw, strip_extension(raw))
}

/// Human-readable label for a directory name. Dots are part of the name, so
/// `v1.2/` stays "V1.2".
pub fn dir_display_name(raw: &str) -> String {
    clean_name(raw, raw)
}

fn clean_name(raw: &str, stem: &str) -> String {
    let stripped = strip_order_prefix(stem);
    let spaced: String = stripped
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();
    let title = capitalize_words(spaced.trim());
    if title.is_empty() {
        raw.to_string()
    } else {
        title
    }
}

fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            out.push(c);
            word_start = true;
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Case-aware collation used for all navigation ordering.
///
/// Names compare case-insensitively first; when they differ only in case the
/// lowercase form sorts first (`"apple" < "Apple" < "banana"`). A final byte
/// comparison keeps the ordering total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| case_tiebreak(a, b))
        .then_with(|| a.cmp(b))
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
