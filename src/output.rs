//! CLI output formatting for the `check` command.
//!
//! Output is information-first: every node leads with its positional index
//! among siblings and its display text, and leaves show their link after an
//! arrow. Nesting is shown by indentation.
//!
//! ```text
//! Navigation (/)
//! 001 Guide
//!     001 Index → /guide/
//!     002 Setup → /guide/setup
//! 002 Tags
//!     001 tutorial
//!         001 2025
//!             001 May
//!                 001 Intro → /2025/may/intro
//!
//! 5 groups, 3 links
//! ```
//!
//! [`format_navigation`] is pure and returns lines for testability;
//! [`print_navigation`] writes them to stdout.

use crate::types::{NavItem, Navigation};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn item_line(index: usize, item: &NavItem) -> String {
    match item.link() {
        Some(link) => format!("{} {} → {}", format_index(index), item.text(), link),
        None => format!("{} {}", format_index(index), item.text()),
    }
}

#[derive(Default)]
struct Totals {
    groups: usize,
    links: usize,
}

fn walk(items: &[NavItem], depth: usize, lines: &mut Vec<String>, totals: &mut Totals) {
    for (i, item) in items.iter().enumerate() {
        lines.push(format!("{}{}", indent(depth), item_line(i + 1, item)));
        if item.is_group() {
            totals.groups += 1;
            walk(item.items(), depth + 1, lines, totals);
        } else {
            totals.links += 1;
        }
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Format a navigation model as an indented tree with a summary line.
pub fn format_navigation(nav: &Navigation) -> Vec<String> {
    let mut lines = vec![format!("Navigation ({})", nav.base)];
    if nav.is_empty() {
        lines.push("    (empty)".to_string());
        return lines;
    }

    let mut totals = Totals::default();
    walk(&nav.items, 0, &mut lines, &mut totals);
    lines.push(String::new());
    lines.push(format!(
        "{}, {}",
        plural(totals.groups, "group"),
        plural(totals.links, "link")
    ));
    lines
}

pub fn print_navigation(nav: &Navigation) {
    for line in format_navigation(nav) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_navigation_says_so() {
        let nav = Navigation {
            base: "/".to_string(),
            items: vec![],
        };
        assert_eq!(format_navigation(&nav), vec!["Navigation (/)", "    (empty)"]);
    }

    #[test]
    fn nested_tree_is_indented_and_counted() {
        let nav = Navigation {
            base: "/".to_string(),
            items: vec![
                NavItem::group(
                    "Guide",
                    true,
                    vec![
                        NavItem::leaf("Index", "/guide/"),
                        NavItem::leaf("Setup", "/guide/setup"),
                    ],
                ),
                NavItem::group(
                    "Tags",
                    true,
                    vec![NavItem::group(
                        "intro",
                        true,
                        vec![NavItem::leaf("Setup", "/guide/setup")],
                    )],
                ),
            ],
        };

        assert_eq!(
            format_navigation(&nav),
            vec![
                "Navigation (/)",
                "001 Guide",
                "    001 Index → /guide/",
                "    002 Setup → /guide/setup",
                "002 Tags",
                "    001 intro",
                "        001 Setup → /guide/setup",
                "",
                "3 groups, 3 links",
            ]
        );
    }

    #[test]
    fn singular_summary() {
        let nav = Navigation {
            base: "/blog/".to_string(),
            items: vec![NavItem::group("A", true, vec![NavItem::leaf("B", "/blog/a/b")])],
        };
        let lines = format_navigation(&nav);
        assert_eq!(lines.first().unwrap(), "Navigation (/blog/)");
        assert_eq!(lines.last().unwrap(), "1 group, 1 link");
    }
}
