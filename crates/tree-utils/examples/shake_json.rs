//! Prune a JSON tree down to the branches holding a given node type
//!
//! Usage:
//!   RUST_LOG=debug cargo run --example shake_json [type]
//!
//! If no type is provided, keeps branches containing "ip" nodes.

use anyhow::Result;
use serde_json::Value;
use std::env;
use tree_utils::prelude::*;

const NETWORK: &str = r#"[
  { "id": "dc-1", "type": "site", "children": [
    { "id": "rack-1", "type": "rack", "children": [
      { "id": "10.0.0.1", "type": "ip" },
      { "id": "psu-1", "type": "power" }
    ] },
    { "id": "rack-2", "type": "rack", "children": [
      { "id": "psu-2", "type": "power" }
    ] }
  ] },
  { "id": "dc-2", "type": "site" }
]"#;

fn main() -> Result<()> {
    env_logger::init();

    let wanted = env::args().nth(1).unwrap_or_else(|| "ip".to_string());
    let keys = FieldKeys::default();
    let tree = parse_forest(NETWORK)?;

    println!("Leaves before shaking:");
    for leaf in get_leaves(&tree, &keys) {
        println!("  {} ({})", leaf["id"], leaf["type"]);
    }

    let mut removed: Vec<Value> = Vec::new();
    let kept = tree_shake(
        ShakeConfig::new(tree, &keys)
            .filter(|node: &Value| node["type"] == wanted.as_str())
            .on_delete(|node| removed.push(node)),
    )?;

    println!("\nRemoved subtrees:");
    for node in &removed {
        println!("  {}", node["id"]);
    }

    println!("\nKept tree:");
    println!("{}", serde_json::to_string_pretty(&kept)?);

    Ok(())
}
