//! In-memory outline trees

use std::fmt;

use tree_stats::TreeProvider;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single outline entry, without its children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutlineItem {
    /// The entry's text
    pub name: String,
    /// Optional free-form note attached to the entry
    pub note: Option<String>,
    /// Whether the entry has been marked done
    pub completed: bool,
}

impl OutlineItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            note: None,
            completed: false,
        }
    }
}

impl fmt::Display for OutlineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.completed {
            write!(f, "[x] {}", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// An outline entry with its nested entries
///
/// # Example
///
/// ```
/// use tree_source::OutlineNode;
///
/// let outline = OutlineNode::new("Projects")
///     .with_child(OutlineNode::new("Garden").with_child(OutlineNode::new("Seeds")))
///     .with_child(OutlineNode::new("Taxes").completed());
///
/// assert_eq!(outline.node_count(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutlineNode {
    pub item: OutlineItem,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Create a childless entry
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            item: OutlineItem::new(name),
            children: Vec::new(),
        }
    }

    /// Attach a note to this entry
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.item.note = Some(note.into());
        self
    }

    /// Mark this entry as completed
    pub fn completed(mut self) -> Self {
        self.item.completed = true;
        self
    }

    /// Append a child entry
    pub fn with_child(mut self, child: OutlineNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child entries
    pub fn with_children(mut self, children: impl IntoIterator<Item = OutlineNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a child entry in place
    pub fn push(&mut self, child: OutlineNode) {
        self.children.push(child);
    }

    /// Count this entry and every nested entry
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

impl TreeProvider for OutlineNode {
    type Node = OutlineItem;

    fn node(&self) -> &OutlineItem {
        &self.item
    }

    fn children(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
        Box::new(self.children.iter())
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_stats::{calculate_ratio_to_root, count_descendant_tree, filter_descendant_tree};

    fn sample() -> OutlineNode {
        OutlineNode::new("Home")
            .with_child(
                OutlineNode::new("Kitchen")
                    .with_child(OutlineNode::new("Fix tap").completed())
                    .with_child(OutlineNode::new("Paint").with_note("white")),
            )
            .with_child(OutlineNode::new("Garage"))
    }

    #[test]
    fn test_builder() {
        let outline = sample();
        assert_eq!(outline.node_count(), 5);
        assert_eq!(outline.child_count(), 2);

        let kitchen = &outline.children[0];
        assert!(kitchen.children[0].item.completed);
        assert_eq!(kitchen.children[1].item.note.as_deref(), Some("white"));
    }

    #[test]
    fn test_push() {
        let mut outline = OutlineNode::new("root");
        outline.push(OutlineNode::new("a"));
        outline.push(OutlineNode::new("b"));
        assert_eq!(outline.node_count(), 3);

        let outline = OutlineNode::new("root")
            .with_children(vec![OutlineNode::new("a"), OutlineNode::new("b")]);
        assert_eq!(outline.node_count(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(OutlineItem::new("Paint").to_string(), "Paint");
        let done = OutlineNode::new("Fix tap").completed();
        assert_eq!(done.item.to_string(), "[x] Fix tap");
    }

    #[test]
    fn test_counts_outline() {
        let outline = sample();
        let mut stats = count_descendant_tree(&outline);
        calculate_ratio_to_root(&mut stats);

        assert_eq!(stats.count, outline.node_count());
        assert_eq!(stats.children[0].node.name, "Kitchen");
        assert_eq!(stats.children[0].count, 3);
        assert_eq!(stats.children[0].ratio_to_root, 0.6);

        let filtered = filter_descendant_tree(&stats, 0.5);
        assert_eq!(filtered.children.len(), 1);
        assert_eq!(filtered.below_threshold_count, 3);
    }
}
