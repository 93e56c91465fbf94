//! Field access traits for tree records

/// Access to the children of a node
///
/// A schema is a separate value from the nodes it describes, so the same
/// record type can be read with different field layouts (see
/// [`FieldKeys`](crate::json::FieldKeys)). All tree operations take the schema
/// by reference next to the forest.
///
/// # Example
///
/// ```ignore
/// fn count<N, S: TreeSchema<N>>(tree: &[N], schema: &S) -> usize {
///     tree.iter()
///         .map(|node| 1 + count(schema.children(node), schema))
///         .sum()
/// }
/// ```
pub trait TreeSchema<N> {
    /// Children of a node, in order
    ///
    /// Returns an empty slice for leaves and for nodes whose children field is
    /// absent or not a sequence.
    fn children<'a>(&self, node: &'a N) -> &'a [N];

    /// Mutable children of a node, in order
    fn children_mut<'a>(&self, node: &'a mut N) -> &'a mut [N];

    /// Detach and return the children of a node
    ///
    /// The children field is removed from the node entirely, so a node whose
    /// children are taken and never set again reads as a leaf.
    fn take_children(&self, node: &mut N) -> Vec<N>;

    /// Replace the children of a node
    fn set_children(&self, node: &mut N, children: Vec<N>);

    /// Check if a node has no children
    fn is_leaf(&self, node: &N) -> bool {
        self.children(node).is_empty()
    }
}

/// Access to the identifier of a node
pub trait KeyedSchema<N>: TreeSchema<N> {
    /// Identifier type
    type Id: PartialEq;

    /// Get the id of a node
    ///
    /// Returns `None` if the node carries no id.
    fn id<'a>(&self, node: &'a N) -> Option<&'a Self::Id>;

    /// Check two ids for equality
    ///
    /// Every id comparison made by the tree operations goes through here.
    fn id_eq(&self, a: &Self::Id, b: &Self::Id) -> bool {
        a == b
    }

    /// Check whether a node's id equals `id`
    fn has_id(&self, node: &N, id: &Self::Id) -> bool {
        self.id(node).map_or(false, |own| self.id_eq(own, id))
    }
}

/// Access to the parent reference of a flat record
pub trait LinkedSchema<N>: KeyedSchema<N> {
    /// Get the id of the record's parent
    ///
    /// Returns `None` for roots.
    fn parent_id<'a>(&self, node: &'a N) -> Option<&'a Self::Id>;

    /// Get the parent field exactly as stored
    ///
    /// Unlike [`parent_id`](Self::parent_id), values that only mark a record
    /// as a root are returned too, so they can be matched explicitly.
    fn raw_parent_id<'a>(&self, node: &'a N) -> Option<&'a Self::Id> {
        self.parent_id(node)
    }

    /// Set or clear the parent reference of a record
    fn set_parent_id(&self, node: &mut N, parent: Option<Self::Id>);
}
