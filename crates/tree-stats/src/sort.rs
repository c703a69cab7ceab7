//! Ordering children by descendant count

use std::cmp::Reverse;

use log::debug;

use crate::descendant::DescendantTreeCount;
use crate::frame::{build_post_order, BuildPass};

struct SortPass;

impl<'a, T: Clone> BuildPass<'a, DescendantTreeCount<T>> for SortPass {
    type Output = DescendantTreeCount<T>;

    fn build(
        &mut self,
        node: &'a DescendantTreeCount<T>,
        mut children: Vec<Self::Output>,
        _eliminated: usize,
    ) -> Self::Output {
        // Stable: equal counts keep their input order.
        children.sort_by_key(|c| Reverse(c.count));
        node.with_children(children)
    }
}

/// Copy `tree` with the children of every node ordered by `count`, largest first
///
/// Children with equal counts keep their relative order from the input.
pub fn sort_descendant_tree<T: Clone>(tree: &DescendantTreeCount<T>) -> DescendantTreeCount<T> {
    let sorted = build_post_order(tree, SortPass);
    debug!("Sorted statistics tree of {} nodes", sorted.count);
    sorted
}
