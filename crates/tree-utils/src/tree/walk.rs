//! Lazy traversal of a forest

use crate::tree::TreeSchema;
use std::collections::VecDeque;

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    PreOrder,
    /// Visit children before parent (bottom-up)
    PostOrder,
    /// Visit level by level (breadth-first)
    BreadthFirst,
}

/// Walk every node of `tree` in the given order
///
/// Roots are visited left to right. The walk keeps its own work list, so its
/// memory is bounded by the size of the forest rather than the call stack.
pub fn walk<'a, 's, N, S>(
    tree: &'a [N],
    schema: &'s S,
    order: TraversalOrder,
) -> Walk<'a, 's, N, S>
where
    S: TreeSchema<N> + ?Sized,
{
    Walk::new(tree, schema, order)
}

/// Iterator for traversing a forest in different orders
pub struct Walk<'a, 's, N, S: ?Sized> {
    schema: &'s S,
    order: TraversalOrder,
    /// Pending nodes, flagged once their children have been expanded.
    /// Used as a stack for the depth-first orders and as a queue otherwise.
    pending: VecDeque<(&'a N, bool)>,
}

impl<'a, 's, N, S: TreeSchema<N> + ?Sized> Walk<'a, 's, N, S> {
    /// Create a new walk over the given roots
    pub fn new(tree: &'a [N], schema: &'s S, order: TraversalOrder) -> Self {
        let pending = match order {
            TraversalOrder::BreadthFirst => tree.iter().map(|node| (node, false)).collect(),
            // Roots are reversed so they're popped in order
            _ => tree.iter().rev().map(|node| (node, false)).collect(),
        };

        Self {
            schema,
            order,
            pending,
        }
    }

    fn next_preorder(&mut self) -> Option<&'a N> {
        let (current, _) = self.pending.pop_back()?;

        // Add children in reverse order so they're popped in correct order
        for child in self.schema.children(current).iter().rev() {
            self.pending.push_back((child, false));
        }

        Some(current)
    }

    fn next_postorder(&mut self) -> Option<&'a N> {
        while let Some((current, expanded)) = self.pending.pop_back() {
            if expanded {
                return Some(current);
            }

            self.pending.push_back((current, true));
            for child in self.schema.children(current).iter().rev() {
                self.pending.push_back((child, false));
            }
        }
        None
    }

    fn next_breadthfirst(&mut self) -> Option<&'a N> {
        let (current, _) = self.pending.pop_front()?;

        for child in self.schema.children(current) {
            self.pending.push_back((child, false));
        }

        Some(current)
    }
}

impl<'a, N, S: TreeSchema<N> + ?Sized> Iterator for Walk<'a, '_, N, S> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }
}
