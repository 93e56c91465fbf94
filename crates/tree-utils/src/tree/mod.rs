//! Generic operations over forests of records
//!
//! Every operation reads node fields through a schema (see [`TreeSchema`]),
//! so the same algorithms work for typed [`Node`]s and for dynamic JSON
//! records described by [`FieldKeys`](crate::json::FieldKeys).

mod build;
mod flatten;
mod node;
mod schema;
mod search;
mod shake;
mod walk;

pub use build::{array_to_tree, flat_to_tree};
pub use flatten::{flatten_with_parents, get_leaves, tree_to_flat};
pub use node::{Node, NodeFields};
pub use schema::{KeyedSchema, LinkedSchema, TreeSchema};
pub use search::{get_node, get_node_mut, get_node_path};
pub use shake::{tree_shake, ShakeConfig};
pub use walk::{walk, TraversalOrder, Walk};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        array_to_tree, flat_to_tree, flatten_with_parents, get_leaves, get_node, get_node_mut,
        get_node_path, tree_shake, tree_to_flat, walk, KeyedSchema, LinkedSchema, Node,
        NodeFields, ShakeConfig, TraversalOrder, TreeSchema,
    };
}
