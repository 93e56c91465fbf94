//! Pruning a forest down to the branches that match a predicate

use crate::error::{Result, TreeError};
use crate::tree::TreeSchema;
use log::{debug, trace};
use std::collections::VecDeque;

/// Configuration for [`tree_shake`]
///
/// # Example
///
/// ```ignore
/// let mut removed = Vec::new();
/// let kept = tree_shake(
///     ShakeConfig::new(tree, &FieldKeys::default())
///         .filter(|node| node["type"] == "ip")
///         .on_delete(|node| removed.push(node)),
/// )?;
/// ```
pub struct ShakeConfig<'a, N, S: ?Sized> {
    tree: Vec<N>,
    schema: &'a S,
    filter: Option<Box<dyn FnMut(&N) -> bool + 'a>>,
    on_delete: Option<Box<dyn FnMut(N) + 'a>>,
}

impl<'a, N, S: TreeSchema<N> + ?Sized> ShakeConfig<'a, N, S> {
    /// Create a shake configuration with no filter and no delete callback
    pub fn new(tree: Vec<N>, schema: &'a S) -> Self {
        Self {
            tree,
            schema,
            filter: None,
            on_delete: None,
        }
    }

    /// Set the predicate a subtree must satisfy somewhere to be kept
    pub fn filter(mut self, filter: impl FnMut(&N) -> bool + 'a) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Set the callback receiving each discarded subtree
    ///
    /// Called once per topmost removed node, which is handed over with its
    /// descendants still attached.
    pub fn on_delete(mut self, on_delete: impl FnMut(N) + 'a) -> Self {
        self.on_delete = Some(Box::new(on_delete));
        self
    }
}

/// A slot in the breadth-first queue
enum Level<'t, N> {
    /// The synthetic parent of the input roots
    Root(&'t mut Vec<N>),
    Node(&'t mut N),
}

/// Prune a forest to the branches containing at least one matching node
///
/// Walks the forest breadth-first. Each child of a visited node is kept when
/// the filter matches the child or any of its descendants, and is otherwise
/// removed whole and handed to `on_delete`. A node left with no children has
/// its children field removed.
///
/// # Errors
///
/// Returns [`TreeError::MissingFilter`] if no filter was configured; nothing
/// is traversed in that case.
pub fn tree_shake<N, S>(config: ShakeConfig<'_, N, S>) -> Result<Vec<N>>
where
    S: TreeSchema<N> + ?Sized,
{
    let ShakeConfig {
        mut tree,
        schema,
        filter,
        on_delete,
    } = config;

    let mut shaker = Shaker {
        filter: filter.ok_or(TreeError::MissingFilter)?,
        on_delete,
        pruned: 0,
    };

    {
        let mut queue = VecDeque::new();
        queue.push_back(Level::Root(&mut tree));

        while let Some(level) = queue.pop_front() {
            match level {
                Level::Root(roots) => {
                    let candidates = std::mem::take(roots);
                    *roots = shaker.keep_matching(schema, candidates);
                    queue.extend(roots.iter_mut().map(Level::Node));
                }
                Level::Node(node) => {
                    let candidates = schema.take_children(node);
                    if candidates.is_empty() {
                        continue;
                    }

                    let kept = shaker.keep_matching(schema, candidates);
                    if !kept.is_empty() {
                        schema.set_children(node, kept);
                        queue.extend(schema.children_mut(node).iter_mut().map(Level::Node));
                    }
                }
            }
        }
    }

    debug!(
        "Tree shake kept {} roots, pruned {} subtrees",
        tree.len(),
        shaker.pruned
    );
    Ok(tree)
}

struct Shaker<'f, N> {
    filter: Box<dyn FnMut(&N) -> bool + 'f>,
    on_delete: Option<Box<dyn FnMut(N) + 'f>>,
    pruned: usize,
}

impl<N> Shaker<'_, N> {
    /// Depth-first check for a matching node anywhere under `root`, inclusive
    fn subtree_matches<S>(&mut self, schema: &S, root: &N) -> bool
    where
        S: TreeSchema<N> + ?Sized,
    {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if (self.filter)(node) {
                return true;
            }
            stack.extend(schema.children(node).iter().rev());
        }
        false
    }

    fn keep_matching<S>(&mut self, schema: &S, candidates: Vec<N>) -> Vec<N>
    where
        S: TreeSchema<N> + ?Sized,
    {
        let mut kept = Vec::with_capacity(candidates.len());
        for node in candidates {
            if self.subtree_matches(schema, &node) {
                kept.push(node);
                continue;
            }

            trace!("Pruning subtree with {} children", schema.children(&node).len());
            self.pruned += 1;
            if let Some(on_delete) = self.on_delete.as_mut() {
                on_delete(node);
            }
        }
        kept
    }
}
