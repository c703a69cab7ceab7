//! Bottom-up construction of a new tree on top of [`traverse_post`]
//!
//! Every pass that produces a tree (counting, filtering, sorting) goes
//! through [`build_post_order`]. Already-built children wait in a frame keyed
//! by their parent until the parent itself is visited. A frame is closed one
//! visit after its last child was seen, because only then is the parent's own
//! result being built.

use std::ops::ControlFlow;

use crate::provider::TreeProvider;
use crate::stack::Stack;
use crate::traverse::traverse_post;

/// Per-node construction step of a tree-building pass
pub(crate) trait BuildPass<'a, P> {
    type Output;

    /// Build the result for `node` from its finished children
    ///
    /// `eliminated` is the summed weight of children that were rejected by
    /// [`BuildPass::eliminate`] instead of being attached.
    fn build(&mut self, node: &'a P, children: Vec<Self::Output>, eliminated: usize)
        -> Self::Output;

    /// Decide whether a finished child is dropped instead of attached
    ///
    /// Returns the weight to absorb into the parent, or `None` to attach.
    fn eliminate(&mut self, _child: &Self::Output) -> Option<usize> {
        None
    }
}

/// Children collected so far for one parent
struct Frame<'a, P, R> {
    parent: &'a P,
    children: Vec<R>,
    eliminated: usize,
}

/// Run `pass` over the tree rooted at `root` and return the new root
///
/// # Panics
///
/// Panics if the traversal reports nodes out of post-order, which can only
/// happen when a provider's children are not restartable.
pub(crate) fn build_post_order<'a, P, B>(root: &'a P, mut pass: B) -> B::Output
where
    P: TreeProvider,
    B: BuildPass<'a, P>,
{
    let mut frames: Stack<Frame<'a, P, B::Output>> = Stack::new();
    let mut pending_pop = false;
    let mut result = None;

    let _ = traverse_post(root, |node, parent, is_last| {
        // The frame closed by the previous visit belongs to this node.
        let (children, eliminated) = if pending_pop {
            pending_pop = false;
            let frame = frames.pop();
            assert!(
                std::ptr::eq(frame.parent, node),
                "frame completed for a node other than its parent"
            );
            (frame.children, frame.eliminated)
        } else {
            (Vec::new(), 0)
        };

        let built = pass.build(node, children, eliminated);

        let Some(parent) = parent else {
            result = Some(built);
            return ControlFlow::Continue(());
        };

        let needs_frame = frames
            .top()
            .map_or(true, |frame| !std::ptr::eq(frame.parent, parent));
        if needs_frame {
            frames.push(Frame {
                parent,
                children: Vec::new(),
                eliminated: 0,
            });
        }

        let weight = pass.eliminate(&built);
        if let Some(frame) = frames.top_mut() {
            match weight {
                Some(weight) => frame.eliminated += weight,
                None => frame.children.push(built),
            }
        }

        if is_last {
            pending_pop = true;
        }
        ControlFlow::Continue(())
    });

    debug_assert!(frames.is_empty(), "unclosed frames after traversal");

    match result {
        Some(root) => root,
        None => unreachable!("post-order traversal always visits the root"),
    }
}
