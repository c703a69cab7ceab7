//! Top-down ratio annotation of a counted tree

use log::trace;

use crate::descendant::DescendantTreeCount;

/// Fill in `ratio_to_root` and `ratio_to_parent` for every node, in place
///
/// The root gets 1.0 for both. This is the only pass that mutates its input;
/// it is meant to run on the tree freshly returned by
/// [`count_descendant_tree`](crate::count_descendant_tree).
pub fn calculate_ratio_to_root<T>(tree: &mut DescendantTreeCount<T>) {
    let root_count = tree.count as f64;
    let mut pending: Vec<(&mut DescendantTreeCount<T>, f64)> = vec![(tree, root_count)];

    while let Some((node, parent_count)) = pending.pop() {
        let count = node.count as f64;
        node.ratio_to_root = count / root_count;
        node.ratio_to_parent = count / parent_count;
        for child in node.children.iter_mut() {
            pending.push((child, count));
        }
    }

    trace!("Annotated ratios against a root count of {}", root_count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios() {
        // root(4) -> a(3) -> b(2) -> c(1)
        let mut tree = DescendantTreeCount::new(
            "root",
            vec![DescendantTreeCount::new(
                "a",
                vec![DescendantTreeCount::new(
                    "b",
                    vec![DescendantTreeCount::new("c", vec![])],
                )],
            )],
        );

        calculate_ratio_to_root(&mut tree);

        assert_eq!(tree.ratio_to_root, 1.0);
        assert_eq!(tree.ratio_to_parent, 1.0);

        let a = &tree.children[0];
        assert_eq!(a.ratio_to_root, 0.75);
        assert_eq!(a.ratio_to_parent, 0.75);

        let b = &a.children[0];
        assert_eq!(b.ratio_to_root, 0.5);
        assert!((b.ratio_to_parent - 2.0 / 3.0).abs() < f64::EPSILON);

        let c = &b.children[0];
        assert_eq!(c.ratio_to_root, 0.25);
        assert_eq!(c.ratio_to_parent, 0.5);
    }

    #[test]
    fn test_single_node() {
        let mut tree = DescendantTreeCount::new((), vec![]);
        calculate_ratio_to_root(&mut tree);
        assert_eq!(tree.ratio_to_root, 1.0);
        assert_eq!(tree.ratio_to_parent, 1.0);
    }
}
