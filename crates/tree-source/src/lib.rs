//! Tree sources for the statistics engine
//!
//! Owned trees that implement [`tree_stats::TreeProvider`], so they can be
//! fed straight into the engine.
//!
//! - **OutlineNode**: an in-memory outline of named entries
//! - **FsNode**: a directory hierarchy loaded by [`FilesystemLoader`]
//!
//! # Example
//!
//! ```no_run
//! use tree_source::FilesystemLoader;
//! use tree_stats::{analyze, StatsOptions};
//!
//! let tree = FilesystemLoader::new().load(".").expect("Failed to load directory");
//! let stats = analyze(&tree, &StatsOptions::new().threshold(0.01)).unwrap();
//! println!("{} entries, {} shown", stats.count, stats.retained_count());
//! ```

pub mod filesystem;
mod outline;

pub use filesystem::{EntryKind, FilesystemLoader, FsEntry, FsNode};
pub use outline::{OutlineItem, OutlineNode};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{EntryKind, FilesystemLoader, FsEntry, FsNode, OutlineItem, OutlineNode};
}
