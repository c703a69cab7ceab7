//! Filesystem trees loaded into memory for statistics

use anyhow::{bail, Context, Result};
use derive_more::Display;
use log::{debug, info, warn};
use std::cmp::Ordering;
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tree_stats::TreeProvider;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntryKind {
    /// A directory - can have children
    #[display(fmt = "Directory")]
    Directory,
    /// Anything else (regular file, symlink, ...)
    #[display(fmt = "File")]
    File,
}

impl EntryKind {
    pub const fn is_directory(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// Metadata for one filesystem entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FsEntry {
    /// The entry's name (not full path)
    pub name: String,
    /// Whether this is a directory or a file
    pub kind: EntryKind,
    /// File size in bytes (0 for directories)
    pub size: u64,
    /// File extension (if any)
    pub extension: Option<String>,
    /// Last modified timestamp
    pub modified: Option<SystemTime>,
}

impl std::fmt::Display for FsEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            EntryKind::Directory => write!(f, "{}/", self.name),
            EntryKind::File => write!(f, "{} ({} bytes)", self.name, self.size),
        }
    }
}

/// A loaded filesystem entry and everything below it
#[derive(Debug, Clone)]
pub struct FsNode {
    pub entry: FsEntry,
    /// Full path on the filesystem
    pub path: PathBuf,
    /// Children, directories first, then alphabetically within each group
    pub children: Vec<FsNode>,
}

impl FsNode {
    /// Count this entry and everything below it
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(FsNode::node_count).sum::<usize>()
    }

    /// Get the path relative to `root`
    pub fn relative_path(&self, root: &Path) -> Option<PathBuf> {
        self.path.strip_prefix(root).ok().map(|p| p.to_path_buf())
    }
}

impl TreeProvider for FsNode {
    type Node = FsEntry;

    fn node(&self) -> &FsEntry {
        &self.entry
    }

    fn children(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
        Box::new(self.children.iter())
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Loads a directory hierarchy into an [`FsNode`] tree
///
/// # Example
///
/// ```no_run
/// use tree_source::FilesystemLoader;
///
/// let tree = FilesystemLoader::new()
///     .max_depth(3)
///     .load("./src")
///     .expect("Failed to load directory");
/// println!("{} entries", tree.node_count());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilesystemLoader {
    /// How many directory levels below the root to descend (`None` = all)
    pub max_depth: Option<usize>,
    /// Whether entries whose name starts with `.` are loaded
    pub include_hidden: bool,
}

impl FilesystemLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit how many directory levels below the root are loaded
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Include or skip hidden entries
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Load the directory at `path` and everything below it
    ///
    /// # Errors
    ///
    /// Returns an error if the path doesn't exist, isn't a directory, or the
    /// root itself can't be read. Unreadable subdirectories are logged and
    /// kept without children; entries whose metadata can't be read are
    /// logged and skipped.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<FsNode> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

        if !metadata.is_dir() {
            bail!("Path must be a directory: {}", path.display());
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("root")
            .to_string();

        let entry = FsEntry {
            name,
            kind: EntryKind::Directory,
            size: 0,
            extension: None,
            modified: metadata.modified().ok(),
        };

        let children = self
            .load_children(path, 1)
            .with_context(|| format!("Failed to list directory {}", path.display()))?;

        let root = FsNode {
            entry,
            path: path.to_path_buf(),
            children,
        };
        info!("Loaded {} entries from {}", root.node_count(), path.display());
        Ok(root)
    }

    /// Load the entries of `dir`, which sits `depth` levels below the root
    fn load_children(&self, dir: &Path, depth: usize) -> io::Result<Vec<FsNode>> {
        if self.max_depth.is_some_and(|max| depth > max) {
            return Ok(Vec::new());
        }

        let children = self.load_entries(fs::read_dir(dir)?, depth);
        debug!("Loaded {} entries from {}", children.len(), dir.display());
        Ok(children)
    }

    /// Build nodes for directory entries, skipping any that can't be read
    fn load_entries(
        &self,
        entries: impl Iterator<Item = io::Result<DirEntry>>,
        depth: usize,
    ) -> Vec<FsNode> {
        let mut children = Vec::new();
        for entry in entries {
            match self.load_entry(entry, depth) {
                Ok(Some(node)) => children.push(node),
                Ok(None) => {}
                Err(e) => warn!("Skipping unreadable entry: {}", e),
            }
        }

        // Directories first, then files, alphabetically within each group
        children.sort_by(|a, b| match (a.entry.kind, b.entry.kind) {
            (EntryKind::Directory, EntryKind::File) => Ordering::Less,
            (EntryKind::File, EntryKind::Directory) => Ordering::Greater,
            _ => a.entry.name.cmp(&b.entry.name),
        });
        children
    }

    /// Build the node for one entry; `None` if it is filtered out
    fn load_entry(&self, entry: io::Result<DirEntry>, depth: usize) -> io::Result<Option<FsNode>> {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !self.include_hidden && name.starts_with('.') {
            return Ok(None);
        }

        let entry_path = entry.path();
        let metadata = entry
            .metadata()
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", entry_path.display(), e)))?;

        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        let extension = if metadata.is_file() {
            entry_path
                .extension()
                .and_then(|e| e.to_str())
                .map(|s| s.to_string())
        } else {
            None
        };

        let grandchildren = if kind.is_directory() {
            match self.load_children(&entry_path, depth + 1) {
                Ok(grandchildren) => grandchildren,
                Err(e) => {
                    warn!("Skipping contents of {}: {}", entry_path.display(), e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Ok(Some(FsNode {
            entry: FsEntry {
                name,
                kind,
                size: if kind.is_directory() { 0 } else { metadata.len() },
                extension,
                modified: metadata.modified().ok(),
            },
            path: entry_path,
            children: grandchildren,
        }))
    }
}
