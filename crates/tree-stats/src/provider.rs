//! The read-only tree capability every input node must support

/// A node that can report its own value and enumerate its children
///
/// This is the only thing the statistics engine knows about a tree. It is a
/// read-only view: nothing in this crate mutates a provider.
///
/// # Contract
///
/// `children()` must return a fresh, finite iterator on every call, yielding
/// the same children in the same order each time. Cycles and iterators that
/// cannot be restarted produce unspecified results.
///
/// # Example
///
/// ```
/// use tree_stats::TreeProvider;
///
/// struct Dir {
///     name: String,
///     entries: Vec<Dir>,
/// }
///
/// impl TreeProvider for Dir {
///     type Node = String;
///
///     fn node(&self) -> &String {
///         &self.name
///     }
///
///     fn children(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
///         Box::new(self.entries.iter())
///     }
/// }
/// ```
pub trait TreeProvider {
    /// The value wrapped by each node
    type Node;

    /// Get the value wrapped by this node
    fn node(&self) -> &Self::Node;

    /// Iterate over direct children
    ///
    /// Returns an empty iterator for leaf nodes.
    fn children(&self) -> Box<dyn Iterator<Item = &Self> + '_>;

    /// Check if this node has no children
    fn is_leaf(&self) -> bool {
        self.children().next().is_none()
    }

    /// Count direct children
    fn child_count(&self) -> usize {
        self.children().count()
    }
}
