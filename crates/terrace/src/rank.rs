//! Layer assignment (ranking).
//!
//! Longest path from parentless roots: `layer = 1 + max(layer(parent))` over the parents that
//! resolve to a node in the table, or `0` for a node with no resolvable parents. A `visiting`
//! set breaks cycles: a parent that is still on the active traversal path contributes `0` to
//! the max for that path, so ranking terminates on any finite input without touching the edge
//! set. Layers inside a cycle are a heuristic lower bound, not a longest-path ranking.
//!
//! The traversal runs on an explicit frame stack rather than recursing, so a fully chained
//! graph of any size cannot exhaust the call stack. Results are memoized per id; the `0`
//! produced by a back-edge is a per-path value and is never memoized.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::table::NodeTable;

struct Frame {
    id: String,
    parents: Vec<String>,
    next: usize,
    /// Highest layer seen among processed parents; `None` until one resolves.
    max_parent: Option<usize>,
}

pub fn assign_layers(table: &mut NodeTable) {
    let mut memo: FxHashMap<String, usize> = FxHashMap::default();

    let ids: Vec<String> = table.keys().cloned().collect();
    for id in &ids {
        compute_layer(table, &mut memo, id);
    }

    for (id, node) in table.iter_mut() {
        node.layer = memo.get(id).copied().unwrap_or(0);
    }
}

/// Parents of `id` that resolve to a table entry. Unresolvable ids contribute no layer; a
/// node whose parents are all unresolvable ranks like a root.
fn resolvable_parents(table: &NodeTable, id: &str) -> Vec<String> {
    table
        .get(id)
        .map(|node| {
            node.parents
                .iter()
                .filter(|p| table.contains_key(p.as_str()))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

fn compute_layer(table: &NodeTable, memo: &mut FxHashMap<String, usize>, start: &str) {
    if memo.contains_key(start) {
        return;
    }

    let mut visiting: FxHashSet<String> = FxHashSet::default();
    visiting.insert(start.to_string());
    let mut stack = vec![Frame {
        id: start.to_string(),
        parents: resolvable_parents(table, start),
        next: 0,
        max_parent: None,
    }];

    while let Some(frame) = stack.last_mut() {
        if let Some(pid) = frame.parents.get(frame.next).cloned() {
            frame.next += 1;
            if let Some(&layer) = memo.get(&pid) {
                frame.max_parent = Some(frame.max_parent.unwrap_or(0).max(layer));
            } else if visiting.contains(&pid) {
                // Back-edge: the revisited node counts as layer 0 on this path.
                frame.max_parent = Some(frame.max_parent.unwrap_or(0));
            } else {
                visiting.insert(pid.clone());
                let parents = resolvable_parents(table, &pid);
                stack.push(Frame {
                    id: pid,
                    parents,
                    next: 0,
                    max_parent: None,
                });
            }
        } else {
            let layer = match frame.max_parent {
                Some(max_parent) => max_parent + 1,
                None => 0,
            };
            visiting.remove(frame.id.as_str());
            memo.insert(frame.id.clone(), layer);
            stack.pop();
            if let Some(below) = stack.last_mut() {
                below.max_parent = Some(below.max_parent.unwrap_or(0).max(layer));
            }
        }
    }
}
