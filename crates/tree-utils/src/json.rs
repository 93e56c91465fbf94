//! Dynamic JSON records with configurable field names
//!
//! [`FieldKeys`] names the id, children and parent fields of
//! [`serde_json::Value`] objects and acts as their schema.

use crate::error::{Result, TreeError};
use crate::tree::{KeyedSchema, LinkedSchema, TreeSchema};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names used to read JSON tree records
///
/// Deserializes from `{"idKey": ..., "childrenKey": ..., "parentKey": ...}`
/// with any missing key falling back to its default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldKeys {
    /// Field holding the node id
    pub id_key: String,

    /// Field holding the array of child nodes
    pub children_key: String,

    /// Field holding the parent id of a flat record
    pub parent_key: String,
}

impl Default for FieldKeys {
    fn default() -> Self {
        Self {
            id_key: "id".to_string(),
            children_key: "children".to_string(),
            parent_key: "parentId".to_string(),
        }
    }
}

impl FieldKeys {
    /// Create field keys with the default names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id field name.
    pub fn id_key(mut self, key: impl Into<String>) -> Self {
        self.id_key = key.into();
        self
    }

    /// Set the children field name.
    pub fn children_key(mut self, key: impl Into<String>) -> Self {
        self.children_key = key.into();
        self
    }

    /// Set the parent field name.
    pub fn parent_key(mut self, key: impl Into<String>) -> Self {
        self.parent_key = key.into();
        self
    }
}

impl TreeSchema<Value> for FieldKeys {
    fn children<'a>(&self, node: &'a Value) -> &'a [Value] {
        match node.get(self.children_key.as_str()) {
            Some(Value::Array(children)) => children.as_slice(),
            _ => &[],
        }
    }

    fn children_mut<'a>(&self, node: &'a mut Value) -> &'a mut [Value] {
        match node.get_mut(self.children_key.as_str()) {
            Some(Value::Array(children)) => children.as_mut_slice(),
            _ => &mut [],
        }
    }

    fn take_children(&self, node: &mut Value) -> Vec<Value> {
        let Some(object) = node.as_object_mut() else {
            return Vec::new();
        };
        // A non-array children field is left alone
        if !matches!(object.get(&self.children_key), Some(Value::Array(_))) {
            return Vec::new();
        }
        match object.remove(&self.children_key) {
            Some(Value::Array(children)) => children,
            _ => Vec::new(),
        }
    }

    fn set_children(&self, node: &mut Value, children: Vec<Value>) {
        let Some(object) = node.as_object_mut() else {
            warn!("Cannot attach {} children to a non-object node", children.len());
            return;
        };
        object.insert(self.children_key.clone(), Value::Array(children));
    }
}

impl KeyedSchema<Value> for FieldKeys {
    type Id = Value;

    fn id<'a>(&self, node: &'a Value) -> Option<&'a Value> {
        node.get(self.id_key.as_str())
    }

    /// Numbers compare by value, so `1` and `1.0` are the same id.
    fn id_eq(&self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
            _ => a == b,
        }
    }
}

impl LinkedSchema<Value> for FieldKeys {
    /// Falsy parent values (`null`, `false`, `0`, `""`) count as no parent.
    fn parent_id<'a>(&self, node: &'a Value) -> Option<&'a Value> {
        node.get(self.parent_key.as_str())
            .filter(|parent| is_truthy(parent))
    }

    fn raw_parent_id<'a>(&self, node: &'a Value) -> Option<&'a Value> {
        node.get(self.parent_key.as_str())
    }

    fn set_parent_id(&self, node: &mut Value, parent: Option<Value>) {
        let Some(object) = node.as_object_mut() else {
            return;
        };
        match parent {
            Some(parent) => {
                object.insert(self.parent_key.clone(), parent);
            }
            None => {
                object.remove(&self.parent_key);
            }
        }
    }
}

/// Whether a JSON value counts as set when used as a parent reference
///
/// `null`, `false`, zero and the empty string are falsy; everything else,
/// including empty arrays and objects, is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parse a JSON document holding an array of root nodes
///
/// # Errors
///
/// Returns [`TreeError::Json`] for malformed JSON and
/// [`TreeError::NotAForest`] if the top level is not an array.
pub fn parse_forest(input: &str) -> Result<Vec<Value>> {
    match serde_json::from_str(input)? {
        Value::Array(nodes) => Ok(nodes),
        other => Err(TreeError::NotAForest {
            found: kind_name(&other),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
