//! Error types for tree operations.

use derive_more::{Display, Error};

/// Result type alias for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur in tree operations.
///
/// Not finding a node is never an error: lookups return `None` or an empty
/// path instead.
#[derive(Debug, Display, Error)]
pub enum TreeError {
    /// `tree_shake` was run without a filter predicate.
    #[display(fmt = "tree shake requires a filter predicate")]
    MissingFilter,

    /// The input was not valid JSON.
    #[display(fmt = "invalid tree JSON: {}", source)]
    Json { source: serde_json::Error },

    /// The input was valid JSON but its top level is not an array of nodes.
    #[display(fmt = "expected a JSON array of root nodes, found {}", found)]
    NotAForest { found: &'static str },
}

impl From<serde_json::Error> for TreeError {
    fn from(source: serde_json::Error) -> Self {
        TreeError::Json { source }
    }
}
