//! Post-order traversal over any [`TreeProvider`]

use std::iter::Peekable;
use std::ops::ControlFlow;

use crate::provider::TreeProvider;
use crate::stack::Stack;

/// Descent state for one node whose children are still being walked
struct Descent<'a, P> {
    node: &'a P,
    parent: Option<&'a P>,
    is_last: bool,
    children: Peekable<Box<dyn Iterator<Item = &'a P> + 'a>>,
}

impl<'a, P: TreeProvider> Descent<'a, P> {
    fn new(node: &'a P, parent: Option<&'a P>, is_last: bool) -> Self {
        Self {
            node,
            parent,
            is_last,
            children: node.children().peekable(),
        }
    }
}

/// Walk a tree in post-order, children before their parent
///
/// `visit` receives the node, a reference to its parent (`None` for the
/// root) and whether the node is the last of its siblings. The root is
/// reported as its own last sibling. Returning [`ControlFlow::Break`] stops
/// the walk, and the break is passed back to the caller.
///
/// Descent state lives on an explicit [`Stack`], so the depth of the tree is
/// not bounded by the call stack.
///
/// # Example
///
/// ```ignore
/// let mut order = Vec::new();
/// traverse_post(&root, |node, _parent, _is_last| {
///     order.push(node.node().clone());
///     ControlFlow::Continue(())
/// });
/// ```
pub fn traverse_post<'a, P, F>(root: &'a P, mut visit: F) -> ControlFlow<()>
where
    P: TreeProvider,
    F: FnMut(&'a P, Option<&'a P>, bool) -> ControlFlow<()>,
{
    let mut stack = Stack::new();
    stack.push(Descent::new(root, None, true));

    while let Some(top) = stack.top_mut() {
        match top.children.next() {
            Some(child) => {
                let is_last = top.children.peek().is_none();
                let parent = top.node;
                stack.push(Descent::new(child, Some(parent), is_last));
            }
            None => {
                let done = stack.pop();
                if visit(done.node, done.parent, done.is_last).is_break() {
                    return ControlFlow::Break(());
                }
            }
        }
    }

    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestNode {
        name: &'static str,
        children: Vec<TestNode>,
    }

    impl TestNode {
        fn new(name: &'static str, children: Vec<TestNode>) -> Self {
            Self { name, children }
        }

        fn leaf(name: &'static str) -> Self {
            Self::new(name, Vec::new())
        }
    }

    impl TreeProvider for TestNode {
        type Node = &'static str;

        fn node(&self) -> &&'static str {
            &self.name
        }

        fn children(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
            Box::new(self.children.iter())
        }
    }

    //   root
    //     a
    //       a1
    //       a2
    //     b
    fn sample() -> TestNode {
        TestNode::new(
            "root",
            vec![
                TestNode::new("a", vec![TestNode::leaf("a1"), TestNode::leaf("a2")]),
                TestNode::leaf("b"),
            ],
        )
    }

    fn record(root: &TestNode) -> Vec<(&'static str, Option<&'static str>, bool)> {
        let mut visits = Vec::new();
        let _ = traverse_post(root, |node, parent, is_last| {
            visits.push((node.name, parent.map(|p| p.name), is_last));
            ControlFlow::Continue(())
        });
        visits
    }

    #[test]
    fn test_children_before_parent() {
        let visits = record(&sample());
        let names: Vec<_> = visits.iter().map(|v| v.0).collect();
        assert_eq!(names, vec!["a1", "a2", "a", "b", "root"]);
    }

    #[test]
    fn test_parent_and_last_sibling_flags() {
        let visits = record(&sample());
        assert_eq!(
            visits,
            vec![
                ("a1", Some("a"), false),
                ("a2", Some("a"), true),
                ("a", Some("root"), false),
                ("b", Some("root"), true),
                ("root", None, true),
            ]
        );
    }

    #[test]
    fn test_single_node() {
        let visits = record(&TestNode::leaf("only"));
        assert_eq!(visits, vec![("only", None, true)]);
    }

    #[test]
    fn test_break_stops_walk() {
        let mut seen = Vec::new();
        let flow = traverse_post(&sample(), |node, _, _| {
            seen.push(node.name);
            if node.name == "a" {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        assert!(flow.is_break());
        assert_eq!(seen, vec!["a1", "a2", "a"]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut node = TestNode::leaf("bottom");
        for _ in 0..100_000 {
            node = TestNode::new("link", vec![node]);
        }

        let mut visited = 0usize;
        let _ = traverse_post(&node, |_, _, _| {
            visited += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(visited, 100_001);

        // Dropping a deeply nested Vec tree recurses; unwind it by hand.
        let mut current = node;
        while let Some(next) = current.children.pop() {
            current = next;
        }
    }
}
