//! Build a typed tree from parent-linked records, flatten it and rebuild it
//!
//! Usage:
//!   cargo run --example flat_round_trip

use anyhow::{ensure, Result};
use tree_utils::prelude::*;

fn print_tree(tree: &[Node<u32, &str>], depth: usize) {
    for node in tree {
        println!("{:indent$}{}", "", node, indent = depth * 2);
        print_tree(&node.children, depth + 1);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let records = vec![
        Node::child_of(4, 3, "mod.rs"),
        Node::new(1, "src"),
        Node::child_of(2, 1, "lib.rs"),
        Node::child_of(3, 1, "tree"),
        Node::child_of(5, 3, "walk.rs"),
        Node::child_of(6, 42, "stray.rs"),
    ];

    let tree = flat_to_tree(records, &NodeFields);
    println!("Tree:");
    print_tree(&tree, 1);

    let path: Vec<_> = get_node_path(&5, &tree, &NodeFields)
        .into_iter()
        .map(|n| n.data)
        .collect();
    println!("\nPath to 5: {}", path.join("/"));

    let flat = flatten_with_parents(tree.clone(), &NodeFields);
    println!("\nFlat records:");
    for record in &flat {
        println!("  {} -> parent {:?}", record, record.parent_id);
    }

    let rebuilt = flat_to_tree(flat.clone(), &NodeFields);
    ensure!(rebuilt == tree, "rebuilt tree differs from the original");

    let subtree = array_to_tree(Some(&3), flat, &NodeFields);
    println!("\nUnder 3:");
    print_tree(&subtree, 1);

    Ok(())
}
