//! Rebuilding a forest from flat records

use crate::tree::LinkedSchema;
use log::debug;

/// Build a forest from flat records linked by parent id
///
/// Records with no parent become roots. Starting from the roots, each node
/// claims every remaining record whose parent id equals its id, in the order
/// those records appear in `flat`, and its claimed children are processed
/// depth-first before its next sibling. Records whose parent is never found
/// (orphans) are dropped.
///
/// The records are consumed: parents come back with their children field set.
/// A parent that claims nothing keeps whatever children field it already had.
pub fn flat_to_tree<N, S>(flat: Vec<N>, schema: &S) -> Vec<N>
where
    S: LinkedSchema<N> + ?Sized,
{
    assemble(flat, schema, |record| schema.parent_id(record).is_none())
}

/// Build the forest hanging under a known parent id
///
/// Records whose stored parent field equals `anchor` become roots, including
/// anchors such as `0` that would otherwise mark a root; `None` selects records
/// without a parent, which makes this equivalent to [`flat_to_tree`].
/// Descendants attach with the same rule as [`flat_to_tree`], and records not
/// reachable from the anchor are dropped.
pub fn array_to_tree<N, S>(anchor: Option<&S::Id>, flat: Vec<N>, schema: &S) -> Vec<N>
where
    S: LinkedSchema<N> + ?Sized,
{
    match anchor {
        Some(anchor) => assemble(flat, schema, |record| {
            schema
                .raw_parent_id(record)
                .map_or(false, |parent| schema.id_eq(parent, anchor))
        }),
        None => flat_to_tree(flat, schema),
    }
}

fn assemble<N, S, F>(records: Vec<N>, schema: &S, is_root: F) -> Vec<N>
where
    S: LinkedSchema<N> + ?Sized,
    F: Fn(&N) -> bool,
{
    let (roots, mut rest): (Vec<usize>, Vec<usize>) =
        (0..records.len()).partition(|&idx| is_root(&records[idx]));

    // Claim children in depth-first order over indices; nodes only move once
    // every claim is settled.
    let mut claimed: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut visited = Vec::with_capacity(records.len());
    let mut stack: Vec<usize> = roots.iter().rev().copied().collect();

    while let Some(idx) = stack.pop() {
        visited.push(idx);

        let Some(id) = schema.id(&records[idx]) else {
            continue;
        };
        let (children, remaining): (Vec<usize>, Vec<usize>) = rest
            .iter()
            .copied()
            .partition(|&r| {
                schema
                    .parent_id(&records[r])
                    .map_or(false, |parent| schema.id_eq(parent, id))
            });
        rest = remaining;

        stack.extend(children.iter().rev());
        claimed[idx] = children;
    }

    if !rest.is_empty() {
        debug!("Dropping {} orphaned records", rest.len());
    }

    // Children always come after their parent in visit order, so walking it
    // backwards attaches complete subtrees.
    let mut slots: Vec<Option<N>> = records.into_iter().map(Some).collect();
    for &idx in visited.iter().rev() {
        let children = std::mem::take(&mut claimed[idx]);
        if children.is_empty() {
            continue;
        }

        let nodes: Vec<N> = children.into_iter().filter_map(|c| slots[c].take()).collect();
        if let Some(parent) = slots[idx].as_mut() {
            schema.set_children(parent, nodes);
        }
    }

    roots.into_iter().filter_map(|idx| slots[idx].take()).collect()
}
