//! Flattening and ranking helpers for statistics trees

use std::cmp::Reverse;
use std::ops::ControlFlow;

use crate::descendant::DescendantTreeCount;
use crate::traverse::traverse_post;

/// Every node of `tree` as a flat list, in post-order (root last)
pub fn collect_all_nodes<T>(tree: &DescendantTreeCount<T>) -> Vec<&DescendantTreeCount<T>> {
    let mut nodes = Vec::with_capacity(tree.count);
    let _ = traverse_post(tree, |node, _parent, _is_last| {
        nodes.push(node);
        ControlFlow::Continue(())
    });
    nodes
}

/// The `limit` largest descendants of `tree` by `count`, root excluded
///
/// Equal counts are ranked in post-order.
pub fn top_descendants<T>(
    tree: &DescendantTreeCount<T>,
    limit: usize,
) -> Vec<&DescendantTreeCount<T>> {
    let mut nodes = collect_all_nodes(tree);
    // Root is always last in post-order.
    nodes.pop();
    nodes.sort_by_key(|n| Reverse(n.count));
    nodes.truncate(limit);
    nodes
}
