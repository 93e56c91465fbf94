use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::HashSet;
use tree_utils::tree::{
    flat_to_tree, flatten_with_parents, get_leaves, get_node, get_node_path, tree_shake,
    tree_to_flat, walk, Node, NodeFields, ShakeConfig, TraversalOrder,
};

type Record = Node<u32, ()>;

/// Flat records with unique ids `1..=n`, each pointing at an earlier record
/// or at nothing.
fn flat_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(any::<Index>(), 1..60).prop_map(|choices| {
        choices
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let id = i as u32 + 1;
                // `i` picks are earlier records, the extra pick means root
                match choice.index(i + 1) {
                    pick if pick == i => Node::new(id, ()),
                    pick => Node::child_of(id, pick as u32 + 1, ()),
                }
            })
            .collect()
    })
}

fn subtree_has_match(node: &Record, divisor: u32) -> bool {
    walk(std::slice::from_ref(node), &NodeFields, TraversalOrder::PreOrder)
        .any(|n| n.id % divisor == 0)
}

proptest! {
    #[test]
    fn flat_to_tree_keeps_every_linked_record(flat in flat_records()) {
        let count = flat.len();
        let tree = flat_to_tree(flat, &NodeFields);
        prop_assert_eq!(tree_to_flat(&tree, &NodeFields).len(), count);
    }

    #[test]
    fn lookup_and_path_agree(flat in flat_records()) {
        let count = flat.len() as u32;
        let tree = flat_to_tree(flat, &NodeFields);

        for id in 1..=count {
            let node = get_node(&id, &tree, &NodeFields);
            prop_assert_eq!(node.map(|n| n.id), Some(id));

            let path = get_node_path(&id, &tree, &NodeFields);
            prop_assert_eq!(path.last().map(|n| n.id), Some(id));
            prop_assert_eq!(path[0].parent_id, None);
            for pair in path.windows(2) {
                prop_assert!(pair[0].children.iter().any(|c| c.id == pair[1].id));
            }
        }

        prop_assert!(get_node(&(count + 1), &tree, &NodeFields).is_none());
        prop_assert!(get_node_path(&(count + 1), &tree, &NodeFields).is_empty());
    }

    #[test]
    fn round_trip_restores_tree(flat in flat_records()) {
        let tree = flat_to_tree(flat, &NodeFields);
        let rebuilt = flat_to_tree(flatten_with_parents(tree.clone(), &NodeFields), &NodeFields);
        prop_assert_eq!(rebuilt, tree);
    }

    #[test]
    fn leaves_and_internal_nodes_cover_flat(flat in flat_records()) {
        let tree = flat_to_tree(flat, &NodeFields);
        let all = tree_to_flat(&tree, &NodeFields);
        let leaves = get_leaves(&tree, &NodeFields);
        let internal = all.iter().filter(|n| !n.children.is_empty()).count();

        prop_assert_eq!(leaves.len() + internal, all.len());
        prop_assert!(leaves.iter().all(|n| n.children.is_empty()));

        let leaf_ids: HashSet<u32> = leaves.iter().map(|n| n.id).collect();
        let all_ids: HashSet<u32> = all.iter().map(|n| n.id).collect();
        prop_assert!(leaf_ids.is_subset(&all_ids));
    }

    #[test]
    fn shake_keeps_exactly_matching_branches(flat in flat_records(), divisor in 2u32..7) {
        let tree = flat_to_tree(flat, &NodeFields);
        let mut removed = Vec::new();

        let kept = tree_shake(
            ShakeConfig::new(tree, &NodeFields)
                .filter(|n: &Record| n.id % divisor == 0)
                .on_delete(|n| removed.push(n)),
        )
        .unwrap();

        for node in tree_to_flat(&kept, &NodeFields) {
            prop_assert!(subtree_has_match(node, divisor));
        }
        for node in &removed {
            prop_assert!(!subtree_has_match(node, divisor));
        }

        let again = tree_shake(
            ShakeConfig::new(kept.clone(), &NodeFields).filter(|n: &Record| n.id % divisor == 0),
        )
        .unwrap();
        prop_assert_eq!(again, kept);
    }
}
