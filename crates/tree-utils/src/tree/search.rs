//! Id lookups over a forest

use crate::tree::KeyedSchema;

/// Find the first node whose id equals `id`
///
/// Searches depth-first, pre-order, left to right: a node's children are only
/// searched after the node itself failed to match. With duplicate ids the
/// first node in that order wins.
pub fn get_node<'a, N, S>(id: &S::Id, tree: &'a [N], schema: &S) -> Option<&'a N>
where
    S: KeyedSchema<N> + ?Sized,
{
    let mut stack: Vec<&N> = tree.iter().rev().collect();

    while let Some(node) = stack.pop() {
        if schema.has_id(node, id) {
            return Some(node);
        }
        stack.extend(schema.children(node).iter().rev());
    }

    None
}

/// Mutable counterpart of [`get_node`], with the same search order
pub fn get_node_mut<'a, N, S>(id: &S::Id, tree: &'a mut [N], schema: &S) -> Option<&'a mut N>
where
    S: KeyedSchema<N> + ?Sized,
{
    let mut stack: Vec<&mut N> = tree.iter_mut().rev().collect();

    while let Some(node) = stack.pop() {
        if schema.has_id(node, id) {
            return Some(node);
        }
        stack.extend(schema.children_mut(node).iter_mut().rev());
    }

    None
}

/// Get the path from a root down to the first node whose id equals `id`
///
/// The path is in root-to-target order and includes the target. Returns an
/// empty vector if no node matches.
pub fn get_node_path<'a, N, S>(id: &S::Id, tree: &'a [N], schema: &S) -> Vec<&'a N>
where
    S: KeyedSchema<N> + ?Sized,
{
    let mut path: Vec<&N> = Vec::new();
    // Each entry carries its depth so the path can be cut back to the
    // candidate route when a subtree is exhausted.
    let mut stack: Vec<(&N, usize)> = tree.iter().rev().map(|node| (node, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        path.truncate(depth);
        path.push(node);

        if schema.has_id(node, id) {
            return path;
        }

        stack.extend(
            schema
                .children(node)
                .iter()
                .rev()
                .map(|child| (child, depth + 1)),
        );
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Node, NodeFields};

    fn sample() -> Vec<Node<u32, &'static str>> {
        vec![
            Node::new(1, "a").with_children(vec![
                Node::new(2, "b"),
                Node::new(3, "c").with_children(vec![Node::new(4, "d")]),
            ]),
            Node::new(5, "e"),
        ]
    }

    fn path_ids(path: &[&Node<u32, &str>]) -> Vec<u32> {
        path.iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_get_node() {
        let tree = sample();
        assert_eq!(get_node(&4, &tree, &NodeFields).map(|n| n.data), Some("d"));
        assert_eq!(get_node(&5, &tree, &NodeFields).map(|n| n.data), Some("e"));
        assert!(get_node(&42, &tree, &NodeFields).is_none());
        assert!(get_node(&1, &[] as &[Node<u32, &str>], &NodeFields).is_none());
    }

    #[test]
    fn test_get_node_first_match_wins() {
        let tree = vec![
            Node::new(1, "outer").with_children(vec![Node::new(7, "deep")]),
            Node::new(7, "shallow"),
        ];
        // Pre-order reaches the nested node before the second root
        assert_eq!(get_node(&7, &tree, &NodeFields).map(|n| n.data), Some("deep"));
    }

    #[test]
    fn test_get_node_mut() {
        let mut tree = sample();
        if let Some(node) = get_node_mut(&4, &mut tree, &NodeFields) {
            node.data = "changed";
        }
        assert_eq!(tree[0].children[1].children[0].data, "changed");
        assert!(get_node_mut(&42, &mut tree, &NodeFields).is_none());
    }

    #[test]
    fn test_get_node_path() {
        let tree = sample();
        assert_eq!(path_ids(&get_node_path(&4, &tree, &NodeFields)), vec![1, 3, 4]);
        assert_eq!(path_ids(&get_node_path(&2, &tree, &NodeFields)), vec![1, 2]);
        assert_eq!(path_ids(&get_node_path(&5, &tree, &NodeFields)), vec![5]);
        assert_eq!(path_ids(&get_node_path(&1, &tree, &NodeFields)), vec![1]);
    }

    #[test]
    fn test_get_node_path_not_found() {
        let tree = sample();
        assert!(get_node_path(&42, &tree, &NodeFields).is_empty());
    }

    #[test]
    fn test_get_node_path_drops_explored_branches() {
        let tree = vec![Node::new(1, "").with_children(vec![
            Node::new(2, "").with_children(vec![Node::new(3, "")]),
            Node::new(4, "").with_children(vec![Node::new(5, "")]),
        ])];
        assert_eq!(path_ids(&get_node_path(&5, &tree, &NodeFields)), vec![1, 4, 5]);
    }
}
