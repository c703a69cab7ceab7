#![allow(dead_code)]

use proptest::prelude::*;
use tree_stats::{DescendantTreeCount, TreeProvider};

/// Minimal owned tree used as engine input
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub children: Vec<Item>,
}

impl Item {
    pub fn new(name: impl Into<String>, children: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Number of nodes in this subtree
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Item::size).sum::<usize>()
    }
}

impl TreeProvider for Item {
    type Node = String;

    fn node(&self) -> &String {
        &self.name
    }

    fn children(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
        Box::new(self.children.iter())
    }
}

/// Render a statistics tree one node per line, children indented
pub fn render(tree: &DescendantTreeCount<String>) -> String {
    fn walk(node: &DescendantTreeCount<String>, depth: usize, out: &mut Vec<String>) {
        out.push(format!(
            "{}{} count={} ratio={:.2} below={}",
            "  ".repeat(depth),
            node.node,
            node.count,
            node.ratio_to_root,
            node.below_threshold_count
        ));
        for child in &node.children {
            walk(child, depth + 1, out);
        }
    }

    let mut lines = Vec::new();
    walk(tree, 0, &mut lines);
    lines.join("\n")
}

/// Arbitrary trees of up to a few dozen nodes
pub fn arb_tree() -> impl Strategy<Value = Item> {
    let leaf = "[a-z]{1,4}".prop_map(|name: String| Item::leaf(name));
    leaf.prop_recursive(4, 64, 6, |inner| {
        ("[a-z]{1,4}", prop::collection::vec(inner, 0..6))
            .prop_map(|(name, children)| Item::new(name, children))
    })
}
