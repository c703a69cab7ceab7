//! Descendant statistics over arbitrary trees
//!
//! Anything implementing [`TreeProvider`] can be turned into a
//! [`DescendantTreeCount`] tree: every node annotated with the size of its
//! subtree and its share of the whole. The statistics tree is itself a
//! provider, so pruning and ordering are further passes of the same
//! post-order traversal over the engine's own output.
//!
//! # Example
//!
//! ```ignore
//! use tree_stats::prelude::*;
//!
//! let mut counted = count_descendant_tree(&outline);
//! calculate_ratio_to_root(&mut counted);
//!
//! let pruned = filter_descendant_tree(&counted, 0.05);
//! let ranked = sort_descendant_tree(&pruned);
//! ```

mod analyze;
mod collect;
mod descendant;
mod filter;
mod frame;
mod options;
mod provider;
mod ratio;
mod sort;
mod stack;
mod traverse;

pub use analyze::analyze;
pub use collect::{collect_all_nodes, top_descendants};
pub use descendant::{count_descendant_tree, DescendantTreeCount};
pub use filter::filter_descendant_tree;
pub use options::StatsOptions;
pub use provider::TreeProvider;
pub use ratio::calculate_ratio_to_root;
pub use sort::sort_descendant_tree;
pub use stack::Stack;
pub use traverse::traverse_post;

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        analyze, calculate_ratio_to_root, collect_all_nodes, count_descendant_tree,
        filter_descendant_tree, sort_descendant_tree, top_descendants, DescendantTreeCount,
        StatsOptions, TreeProvider,
    };
}
