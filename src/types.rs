//! The navigation model handed to the theme layer.
//!
//! Serialized as JSON in the shape sidebar themes expect:
//!
//! ```json
//! {
//!   "/": [
//!     { "text": "Guide", "collapsed": true, "items": [
//!       { "text": "Guide", "link": "/guide/" },
//!       { "text": "Setup", "link": "/guide/setup" }
//!     ]}
//!   ]
//! }
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One node of the sidebar: a link or a group of nodes, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    Leaf {
        text: String,
        link: String,
    },
    Group {
        text: String,
        collapsed: bool,
        items: Vec<NavItem>,
    },
}

impl NavItem {
    pub fn leaf(text: impl Into<String>, link: impl Into<String>) -> Self {
        NavItem::Leaf {
            text: text.into(),
            link: link.into(),
        }
    }

    pub fn group(text: impl Into<String>, collapsed: bool, items: Vec<NavItem>) -> Self {
        NavItem::Group {
            text: text.into(),
            collapsed,
            items,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            NavItem::Leaf { text, .. } | NavItem::Group { text, .. } => text,
        }
    }

    /// Link of a leaf; groups have none.
    pub fn link(&self) -> Option<&str> {
        match self {
            NavItem::Leaf { link, .. } => Some(link),
            NavItem::Group { .. } => None,
        }
    }

    /// Children of a group; leaves have none.
    pub fn items(&self) -> &[NavItem] {
        match self {
            NavItem::Leaf { .. } => &[],
            NavItem::Group { items, .. } => items,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, NavItem::Group { .. })
    }
}

/// Whether a sibling list already holds a leaf with this link.
pub fn contains_link(items: &[NavItem], link: &str) -> bool {
    items.iter().any(|item| item.link() == Some(link))
}

/// The complete sidebar, keyed by the URL base it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub base: String,
    pub items: Vec<NavItem>,
}

impl Navigation {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Serialize for Navigation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.base, &self.items)?;
        map.end()
    }
}
