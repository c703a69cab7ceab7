//! One-call statistics pipeline

use anyhow::{Context, Result};
use log::debug;

use crate::descendant::{count_descendant_tree, DescendantTreeCount};
use crate::filter::filter_descendant_tree;
use crate::options::StatsOptions;
use crate::provider::TreeProvider;
use crate::ratio::calculate_ratio_to_root;
use crate::sort::sort_descendant_tree;

/// Count, annotate, and optionally filter and sort a tree in one call
///
/// Runs [`count_descendant_tree`] and [`calculate_ratio_to_root`], then
/// [`filter_descendant_tree`] when a threshold is set and
/// [`sort_descendant_tree`] when sorting is enabled.
///
/// # Errors
///
/// Returns an error if `options` fail [`StatsOptions::validate`].
pub fn analyze<P>(root: &P, options: &StatsOptions) -> Result<DescendantTreeCount<P::Node>>
where
    P: TreeProvider,
    P::Node: Clone,
{
    options.validate().context("invalid statistics options")?;

    let mut tree = count_descendant_tree(root);
    calculate_ratio_to_root(&mut tree);

    if let Some(threshold) = options.threshold {
        tree = filter_descendant_tree(&tree, threshold);
    }
    if options.sort {
        tree = sort_descendant_tree(&tree);
    }

    debug!(
        "Analyzed tree: {} nodes, {} retained, {} direct children",
        tree.count,
        tree.retained_count(),
        tree.children_count
    );
    Ok(tree)
}
