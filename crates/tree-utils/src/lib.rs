//! Tree Utilities Library
//!
//! Search, flatten, rebuild and prune hierarchical data stored as nested
//! sequences of records, without assuming a fixed schema.
//!
//! # Core Concepts
//!
//! - **Schema**: traits reading the id, children and parent fields of a record
//! - **Node**: a statically typed record, read by [`NodeFields`](tree::NodeFields)
//! - **FieldKeys**: runtime-configured field names for `serde_json::Value` records
//!
//! Read-only operations borrow the forest and return references into it.
//! Operations that rebuild the forest (`flat_to_tree`, `array_to_tree`,
//! `tree_shake`, `flatten_with_parents`) take the records by value.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tree_utils::prelude::*;
//!
//! let keys = FieldKeys::default();
//! let tree = vec![json!({ "id": 1, "children": [{ "id": 2 }, { "id": 3 }] })];
//!
//! let path = get_node_path(&json!(3), &tree, &keys);
//! assert_eq!(path.len(), 2);
//!
//! let leaves = get_leaves(&tree, &keys);
//! assert_eq!(leaves, vec![&json!({ "id": 2 }), &json!({ "id": 3 })]);
//! ```

pub mod error;
pub mod json;
pub mod tree;

pub use error::{Result, TreeError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::TreeError;
    pub use crate::json::{parse_forest, FieldKeys};
    pub use crate::tree::prelude::*;
}
