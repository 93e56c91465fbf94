//! Flattening a forest into a sequence

use crate::tree::{walk, LinkedSchema, TraversalOrder, TreeSchema};

/// Get all leaf nodes, pre-order, left to right
///
/// A leaf is a node with no non-empty children field. Internal nodes are never
/// returned.
pub fn get_leaves<'a, N, S>(tree: &'a [N], schema: &S) -> Vec<&'a N>
where
    S: TreeSchema<N> + ?Sized,
{
    walk(tree, schema, TraversalOrder::PreOrder)
        .filter(|node| schema.is_leaf(node))
        .collect()
}

/// Get every node, pre-order: a node appears before its descendants
pub fn tree_to_flat<'a, N, S>(tree: &'a [N], schema: &S) -> Vec<&'a N>
where
    S: TreeSchema<N> + ?Sized,
{
    walk(tree, schema, TraversalOrder::PreOrder).collect()
}

/// Break a forest into flat records linked by parent id
///
/// Every node is detached from its children and has its parent field set to
/// the id of the node it hung under; roots have their parent field cleared.
/// Records come out in pre-order, so [`flat_to_tree`](crate::tree::flat_to_tree)
/// rebuilds the same forest with sibling order intact.
pub fn flatten_with_parents<N, S>(tree: Vec<N>, schema: &S) -> Vec<N>
where
    S: LinkedSchema<N> + ?Sized,
    S::Id: Clone,
{
    let mut flat = Vec::new();
    let mut stack: Vec<(N, Option<S::Id>)> = tree.into_iter().rev().map(|n| (n, None)).collect();

    while let Some((mut node, parent)) = stack.pop() {
        schema.set_parent_id(&mut node, parent);
        let children = schema.take_children(&mut node);

        let id = schema.id(&node).cloned();
        stack.extend(children.into_iter().rev().map(|child| (child, id.clone())));

        flat.push(node);
    }

    flat
}
