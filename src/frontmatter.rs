//! Frontmatter extraction and the metadata accessors the sidebar needs.
//!
//! A post may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Getting Started
//! tags: rust, tooling
//! ---
//!
//! Body text...
//! ```
//!
//! Only two keys matter for navigation. `title` overrides the filename-derived
//! label. `tags` is either a comma-separated string or a YAML list. Every
//! other key is kept in the map untouched. A file without a block has empty
//! metadata; a malformed block is an error the caller logs before falling
//! back to empty metadata.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

const FENCE: &str = "---";
const END_FENCE_ALT: &str = "...";

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("file is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("frontmatter opened with `---` but never closed")]
    Unterminated,
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("frontmatter must be a mapping of keys to values")]
    NotAMapping,
}

/// Parsed frontmatter key-value map. Empty when a file has no block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    values: Mapping,
}

impl Metadata {
    /// Parse the YAML between the fences. Blank or `null` content is empty metadata.
    pub fn from_yaml(yaml: &str) -> Result<Self, FrontMatterError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        match serde_yaml::from_str::<Value>(yaml)? {
            Value::Mapping(values) => Ok(Self { values }),
            Value::Null => Ok(Self::default()),
            _ => Err(FrontMatterError::NotAMapping),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// A scalar field as a trimmed, non-empty string.
    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }

    /// The `title` field, if present and non-empty.
    pub fn title(&self) -> Option<String> {
        self.string("title")
    }

    /// The declared tags, in declaration order.
    ///
    /// - `tags: a, b` → `["a", "b"]`
    /// - `tags: [a, " b ", ""]` → `["a", "b"]`
    /// - absent, empty string or empty list → `[]`
    ///
    /// Duplicates are kept; the tag index dedups by link.
    pub fn tags(&self) -> Vec<String> {
        match self.get("tags") {
            Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(value) => scalar_to_string(value)
                .map(|joined| {
                    joined
                        .split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if s.is_empty() { None } else { Some(s) }
}

/// Split a document into `(yaml, body)`.
///
/// Returns `Ok(None)` when the document does not open with a `---` line. The
/// closing fence may be `---` or `...`.
pub fn split(content: &str) -> Result<Option<(&str, &str)>, FrontMatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = strip_opening_fence(content) else {
        return Ok(None);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let bare = trim_eol(line).trim_end();
        if bare == FENCE || bare == END_FENCE_ALT {
            return Ok(Some((&rest[..offset], &rest[offset + line.len()..])));
        }
        offset += line.len();
    }
    Err(FrontMatterError::Unterminated)
}

fn strip_opening_fence(content: &str) -> Option<&str> {
    let first_end = content.find('\n').map(|i| i + 1).unwrap_or(content.len());
    let first = trim_eol(&content[..first_end]).trim_end();
    (first == FENCE).then(|| &content[first_end..])
}

fn trim_eol(line: &str) -> &str {
    line.trim_end_matches(|c| c == '\n' || c == '\r')
}

/// Parse the metadata block of a raw file.
pub fn parse(bytes: &[u8]) -> Result<Metadata, FrontMatterError> {
    let content = std::str::from_utf8(bytes)?;
    match split(content)? {
        Some((yaml, _body)) => Metadata::from_yaml(yaml),
        None => Ok(Metadata::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(doc: &str) -> Metadata {
        parse(doc.as_bytes()).unwrap()
    }

    #[test]
    fn no_block_is_empty_metadata() {
        let m = meta("# Just a heading\n\nText.");
        assert!(m.is_empty());
        assert_eq!(m.title(), None);
        assert!(m.tags().is_empty());
    }

    #[test]
    fn title_and_string_tags() {
        let m = meta("---\ntitle: Hello\ntags: rust, cli , \n---\nbody");
        assert_eq!(m.title().as_deref(), Some("Hello"));
        assert_eq!(m.tags(), vec!["rust", "cli"]);
    }

    #[test]
    fn list_tags_are_trimmed_and_filtered() {
        let m = meta("---\ntags:\n  - \" a \"\n  - ''\n  - 2024\n  - true\n  - [nested]\n---\n");
        assert_eq!(m.tags(), vec!["a", "2024", "true"]);
    }

    #[test]
    fn empty_tag_forms_yield_nothing() {
        assert!(meta("---\ntags: ''\n---\n").tags().is_empty());
        assert!(meta("---\ntags: []\n---\n").tags().is_empty());
        assert!(meta("---\ntags:\n---\n").tags().is_empty());
        assert!(meta("---\ntitle: x\n---\n").tags().is_empty());
    }

    #[test]
    fn duplicate_tags_are_preserved_in_order() {
        let m = meta("---\ntags: a, b, a\n---\n");
        assert_eq!(m.tags(), vec!["a", "b", "a"]);
    }

    #[test]
    fn blank_title_is_absent() {
        assert_eq!(meta("---\ntitle: '   '\n---\n").title(), None);
        assert_eq!(meta("---\ntitle:\n---\n").title(), None);
    }

    #[test]
    fn empty_block_is_empty_metadata() {
        assert!(meta("---\n---\nbody").is_empty());
    }

    #[test]
    fn dots_close_the_block() {
        let m = meta("---\ntitle: Dots\n...\nbody");
        assert_eq!(m.title().as_deref(), Some("Dots"));
    }

    #[test]
    fn crlf_and_bom_are_tolerated() {
        let m = meta("\u{feff}---\r\ntitle: Windows\r\n---\r\nbody");
        assert_eq!(m.title().as_deref(), Some("Windows"));
    }

    #[test]
    fn split_returns_body() {
        let (yaml, body) = split("---\ntitle: T\n---\nHello\n").unwrap().unwrap();
        assert_eq!(yaml, "title: T\n");
        assert_eq!(body, "Hello\n");
    }

    #[test]
    fn horizontal_rule_later_is_not_frontmatter() {
        assert!(split("Intro\n---\nMore").unwrap().is_none());
    }

    #[test]
    fn unterminated_block_is_error() {
        let err = parse(b"---\ntitle: never closed\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Unterminated));
    }

    #[test]
    fn malformed_yaml_is_error() {
        let err = parse(b"---\ntitle: [unclosed\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Yaml(_)));
    }

    #[test]
    fn non_mapping_block_is_error() {
        let err = parse(b"---\n- a\n- b\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::NotAMapping));
    }

    #[test]
    fn invalid_utf8_is_error() {
        let err = parse(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, FrontMatterError::Encoding(_)));
    }

    #[test]
    fn other_keys_are_reachable() {
        let m = meta("---\ndate: 2025-05-01\n---\n");
        assert_eq!(m.string("date").as_deref(), Some("2025-05-01"));
    }
}
