//! # Simple Blog
//!
//! Sidebar and tag-index generation for a content-driven static blog. The
//! filesystem is the data source: directories become sidebar groups,
//! markdown files become links, and frontmatter `tags` become a second,
//! tag-first view of the same tree.
//!
//! # Pipeline
//!
//! ```text
//! content/  ──walk──▶  structural groups  ─┐
//!           ──scan──▶  TagIndex ──▶ tag groups ─┴─▶  Navigation  ──▶  JSON
//! ```
//!
//! Both passes read the tree through a [`source::ContentSource`], so the
//! whole pipeline runs against an in-memory tree in tests. Generation is
//! best-effort: anything unreadable or malformed is logged through `tracing`
//! and left out, and the result is always a navigation model (possibly
//! empty), never an error.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Entry point: composes structural and tag groups into a [`types::Navigation`] |
//! | [`walk`] | Structural walk: one group per directory, index files first |
//! | [`tags`] | Tag scan into a [`tags::TagIndex`] and per-tag folder trees |
//! | [`content`] | Entry filtering and per-file loading shared by both walks |
//! | [`frontmatter`] | `---` YAML block extraction, `title`/`tags` accessors |
//! | [`naming`] | Display names from raw file names, collation |
//! | [`links`] | File path → URL mapping |
//! | [`source`] | Filesystem and in-memory content trees |
//! | [`types`] | `NavItem` / `Navigation` output model |
//! | [`config`] | `config.toml` loading, validation, stock defaults |
//! | [`scaffold`] | `new-post` file creation |
//! | [`output`] | CLI tree display |

pub mod config;
pub mod content;
pub mod frontmatter;
pub mod links;
pub mod nav;
pub mod naming;
pub mod output;
pub mod scaffold;
pub mod source;
pub mod tags;
pub mod types;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
