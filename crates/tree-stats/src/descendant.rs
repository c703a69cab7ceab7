//! Statistics tree and the descendant counting pass

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::frame::{build_post_order, BuildPass};
use crate::provider::TreeProvider;

/// Descendant statistics for one node of a source tree
///
/// Wraps a clone of the source node's value. Every pass that produces a
/// `DescendantTreeCount` allocates a new tree, so counted, filtered and
/// sorted views of the same source can be kept side by side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DescendantTreeCount<T> {
    /// The wrapped source value
    pub node: T,

    /// This node plus all of its descendants in the source tree
    ///
    /// Filtering never changes this value.
    pub count: usize,

    /// Number of children retained in this node
    pub children_count: usize,

    /// `count` as a fraction of the parent's `count` (1.0 for the root)
    pub ratio_to_parent: f64,

    /// `count` as a fraction of the root's `count` (1.0 for the root)
    pub ratio_to_root: f64,

    /// Total `count` of descendants pruned beneath this node by filtering
    pub below_threshold_count: usize,

    /// Retained children, in source order until sorted
    pub children: Vec<DescendantTreeCount<T>>,
}

impl<T> DescendantTreeCount<T> {
    /// Create a statistics node with zeroed ratios
    pub fn new(node: T, children: Vec<DescendantTreeCount<T>>) -> Self {
        let count = 1 + children.iter().map(|c| c.count).sum::<usize>();
        Self {
            node,
            count,
            children_count: children.len(),
            ratio_to_parent: 0.0,
            ratio_to_root: 0.0,
            below_threshold_count: 0,
            children,
        }
    }

    /// Nodes of this subtree that survived filtering
    pub fn retained_count(&self) -> usize {
        self.count.saturating_sub(self.below_threshold_count)
    }

    /// Returns true if no children are retained
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Copy every statistic of `self` onto a new node with other children
    pub(crate) fn with_children(&self, children: Vec<DescendantTreeCount<T>>) -> Self
    where
        T: Clone,
    {
        Self {
            node: self.node.clone(),
            count: self.count,
            children_count: children.len(),
            ratio_to_parent: self.ratio_to_parent,
            ratio_to_root: self.ratio_to_root,
            below_threshold_count: self.below_threshold_count,
            children,
        }
    }
}

// The derived drop would recurse once per level of the tree.
impl<T> Drop for DescendantTreeCount<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl<T> TreeProvider for DescendantTreeCount<T> {
    type Node = T;

    fn node(&self) -> &T {
        &self.node
    }

    fn children(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
        Box::new(self.children.iter())
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }
}

struct CountPass;

impl<'a, P> BuildPass<'a, P> for CountPass
where
    P: TreeProvider,
    P::Node: Clone,
{
    type Output = DescendantTreeCount<P::Node>;

    fn build(
        &mut self,
        node: &'a P,
        children: Vec<Self::Output>,
        _eliminated: usize,
    ) -> Self::Output {
        DescendantTreeCount::new(node.node().clone(), children)
    }
}

/// Build a statistics tree with `count` and `children_count` for every node
///
/// Ratios and `below_threshold_count` are left at zero; run
/// [`calculate_ratio_to_root`](crate::calculate_ratio_to_root) next.
pub fn count_descendant_tree<P>(root: &P) -> DescendantTreeCount<P::Node>
where
    P: TreeProvider,
    P::Node: Clone,
{
    let counted = build_post_order(root, CountPass);
    debug!(
        "Counted {} nodes ({} direct children of root)",
        counted.count, counted.children_count
    );
    counted
}
