//! Threshold pruning of a ratio-annotated tree

use log::debug;

use crate::descendant::DescendantTreeCount;
use crate::frame::{build_post_order, BuildPass};

struct FilterPass {
    threshold: f64,
}

impl<'a, T: Clone> BuildPass<'a, DescendantTreeCount<T>> for FilterPass {
    type Output = DescendantTreeCount<T>;

    fn build(
        &mut self,
        node: &'a DescendantTreeCount<T>,
        children: Vec<Self::Output>,
        eliminated: usize,
    ) -> Self::Output {
        // Weight this node absorbed in an earlier filter pass that none of its
        // input children account for. Zero on a freshly counted tree.
        let absorbed_below_children: usize = node
            .children
            .iter()
            .map(|c| c.below_threshold_count)
            .sum();
        let already_absorbed = node
            .below_threshold_count
            .saturating_sub(absorbed_below_children);

        let carried: usize = children.iter().map(|c| c.below_threshold_count).sum();

        let mut filtered = node.with_children(children);
        filtered.below_threshold_count = already_absorbed + carried + eliminated;
        filtered
    }

    fn eliminate(&mut self, child: &Self::Output) -> Option<usize> {
        (child.ratio_to_root < self.threshold).then_some(child.count)
    }
}

/// Drop every node whose `ratio_to_root` is below `threshold`
///
/// The root is always kept. The `count` of each dropped subtree is added to
/// `below_threshold_count` of its nearest kept ancestor, so no weight is
/// lost; `count` itself is left as it was in the input. Ratios must already
/// be annotated with [`calculate_ratio_to_root`](crate::calculate_ratio_to_root).
///
/// A threshold of 0 keeps every node; a threshold above 1 keeps only the root.
pub fn filter_descendant_tree<T: Clone>(
    tree: &DescendantTreeCount<T>,
    threshold: f64,
) -> DescendantTreeCount<T> {
    let filtered = build_post_order(tree, FilterPass { threshold });
    debug!(
        "Filtered at threshold {}: {} of {} nodes below threshold",
        threshold, filtered.below_threshold_count, filtered.count
    );
    filtered
}
