//! Statically typed tree records

use crate::tree::{KeyedSchema, LinkedSchema, TreeSchema};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single typed tree record
///
/// Generic over the id type `I` and the data type `D`, which stores arbitrary
/// user-defined payload. The same struct serves both as a nested tree node
/// (via `children`) and as a flat record (via `parent_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<I, D> {
    /// Identifier, unique within the tree
    pub id: I,
    /// Id of the parent record, `None` for roots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<I>,
    /// User-defined data associated with this node
    pub data: D,
    /// Ordered child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node<I, D>>,
}

impl<I, D> Node<I, D> {
    /// Create a new root node without children
    pub fn new(id: I, data: D) -> Self {
        Self {
            id,
            parent_id: None,
            data,
            children: Vec::new(),
        }
    }

    /// Create a new flat record pointing at `parent_id`
    pub fn child_of(id: I, parent_id: I, data: D) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new(id, data)
        }
    }

    /// Replace the children of this node
    pub fn with_children(mut self, children: Vec<Node<I, D>>) -> Self {
        self.children = children;
        self
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<I: fmt::Display, D: fmt::Display> fmt::Display for Node<I, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.data)
    }
}

/// Schema for [`Node`], reading its struct fields directly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeFields;

impl<I, D> TreeSchema<Node<I, D>> for NodeFields {
    fn children<'a>(&self, node: &'a Node<I, D>) -> &'a [Node<I, D>] {
        &node.children
    }

    fn children_mut<'a>(&self, node: &'a mut Node<I, D>) -> &'a mut [Node<I, D>] {
        &mut node.children
    }

    fn take_children(&self, node: &mut Node<I, D>) -> Vec<Node<I, D>> {
        std::mem::take(&mut node.children)
    }

    fn set_children(&self, node: &mut Node<I, D>, children: Vec<Node<I, D>>) {
        node.children = children;
    }
}

impl<I: PartialEq, D> KeyedSchema<Node<I, D>> for NodeFields {
    type Id = I;

    fn id<'a>(&self, node: &'a Node<I, D>) -> Option<&'a I> {
        Some(&node.id)
    }
}

impl<I: PartialEq, D> LinkedSchema<Node<I, D>> for NodeFields {
    fn parent_id<'a>(&self, node: &'a Node<I, D>) -> Option<&'a I> {
        node.parent_id.as_ref()
    }

    fn set_parent_id(&self, node: &mut Node<I, D>, parent: Option<I>) {
        node.parent_id = parent;
    }
}
