//! Read-only access to the content tree.
//!
//! The walkers never touch `std::fs` directly. They go through the
//! [`ContentSource`] trait, which exposes exactly two operations: list a
//! directory and read a file. Paths are root-relative and `/`-separated on
//! every platform, with `""` naming the root itself.
//!
//! - [`FsSource`] reads a real directory. Symlinked directories are followed
//!   unless they point back at a directory enclosing the link.
//! - [`MemorySource`] holds a tree in a map, which keeps walker tests free of
//!   temp directories and lets them simulate unreadable entries.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// A single directory entry as seen by the walkers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Read-only view of a content tree.
pub trait ContentSource {
    /// Immediate entries of a directory, in no particular order.
    fn list(&self, dir: &str) -> io::Result<Vec<Entry>>;

    /// Raw bytes of a file.
    fn read(&self, file: &str) -> io::Result<Vec<u8>>;
}

/// Join a root-relative directory and a child name.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}

/// Content tree backed by the filesystem.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, rel: &str) -> PathBuf {
        rel.split('/')
            .filter(|s| !s.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    /// Canonical paths of `dir` and of every directory above it up to the root.
    fn enclosing_dirs(&self, dir: &str) -> Vec<PathBuf> {
        let mut rel = String::new();
        let mut open = Vec::new();
        for segment in std::iter::once("").chain(dir.split('/').filter(|s| !s.is_empty())) {
            rel = join(&rel, segment);
            if let Ok(path) = fs::canonicalize(self.resolve(&rel)) {
                open.push(path);
            }
        }
        open
    }
}

/// Drop entries the OS failed to return, logging each one.
fn readable<T>(dir: &str, entries: impl IntoIterator<Item = io::Result<T>>) -> Vec<T> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(dir = %dir, error = %e, "Skipping unreadable entry");
                None
            }
        })
        .collect()
}

impl ContentSource for FsSource {
    fn list(&self, dir: &str) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        let mut enclosing: Option<Vec<PathBuf>> = None;
        for entry in readable(dir, fs::read_dir(self.resolve(dir))?) {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            // Follows symlinks so linked directories are walked like real ones.
            let kind = if path.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };

            let is_link = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);
            if is_link && kind == EntryKind::Dir {
                // A link back into the current path would recurse forever.
                let open = enclosing.get_or_insert_with(|| self.enclosing_dirs(dir));
                match fs::canonicalize(&path) {
                    Ok(target) if open.contains(&target) => {
                        tracing::warn!(
                            path = %join(dir, &name),
                            target = %target.display(),
                            "Skipping symlink to an enclosing directory"
                        );
                        continue;
                    }
                    Err(e) => {
                        tracing::warn!(path = %join(dir, &name), error = %e, "Skipping unresolvable symlink");
                        continue;
                    }
                    Ok(_) => {}
                }
            }

            entries.push(Entry { name, kind });
        }
        Ok(entries)
    }

    fn read(&self, file: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(file))
    }
}

/// In-memory content tree. Directories are implied by file paths.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<String, Vec<u8>>,
    dirs: BTreeSet<String>,
    unreadable: BTreeSet<String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories.
    pub fn with_file(mut self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.add_parents(path);
        self.files.insert(path.to_string(), contents.into());
        self
    }

    /// Add an empty directory.
    pub fn with_dir(mut self, path: &str) -> Self {
        self.add_parents(path);
        self.dirs.insert(path.to_string());
        self
    }

    /// Make listing or reading `path` fail with `PermissionDenied`.
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(path.to_string());
        self
    }

    fn add_parents(&mut self, path: &str) {
        let mut current = path;
        while let Some((parent, _)) = current.rsplit_once('/') {
            self.dirs.insert(parent.to_string());
            current = parent;
        }
    }

    fn check_readable(&self, path: &str) -> io::Result<()> {
        if self.unreadable.contains(path) {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{path}: permission denied"),
            ))
        } else {
            Ok(())
        }
    }

    fn parent_of(path: &str) -> &str {
        path.rsplit_once('/').map(|(p, _)| p).unwrap_or("")
    }

    fn name_of(path: &str) -> &str {
        path.rsplit_once('/').map(|(_, n)| n).unwrap_or(path)
    }
}

impl ContentSource for MemorySource {
    fn list(&self, dir: &str) -> io::Result<Vec<Entry>> {
        self.check_readable(dir)?;
        if !dir.is_empty() && !self.dirs.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{dir}: no such directory"),
            ));
        }

        let files = self
            .files
            .keys()
            .filter(|p| Self::parent_of(p) == dir)
            .map(|p| Entry::file(Self::name_of(p)));
        let dirs = self
            .dirs
            .iter()
            .filter(|p| Self::parent_of(p) == dir)
            .map(|p| Entry::dir(Self::name_of(p)));
        Ok(files.chain(dirs).collect())
    }

    fn read(&self, file: &str) -> io::Result<Vec<u8>> {
        self.check_readable(file)?;
        self.files.get(file).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{file}: no such file"))
        })
    }
}
