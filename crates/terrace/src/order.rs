//! Layer grouping and intra-layer ordering.
//!
//! Grouping buckets nodes by assigned layer, keeping an explicit (possibly empty) bucket for
//! every index so later stages can index by rank. Ordering is a single forward barycenter
//! pass seeded by an alphabetical sort: deliberately one-shot, not iterated to convergence,
//! so orderings stay deterministic and cheap at the cost of leftover crossings on complex
//! graphs. Upgrading this to a multi-pass sweep would change observable node order.

use crate::table::NodeTable;

/// Buckets node ids by layer, indexed `0..=max(layer)`. Bucket content is table insertion
/// order until [`order_layers`] runs.
pub fn group_by_layer(table: &NodeTable) -> Vec<Vec<String>> {
    let bucket_count = table.values().map(|n| n.layer + 1).max().unwrap_or(0);
    let mut layers: Vec<Vec<String>> = vec![Vec::new(); bucket_count];
    for (id, node) in table.iter() {
        layers[node.layer].push(id.clone());
    }
    layers
}

/// Orders every layer in place and records each node's sort key in `WorkingNode::order`.
pub fn order_layers(table: &mut NodeTable, layers: &mut [Vec<String>]) {
    // Alphabetical seed. Layer 0 has no positional signal at all, so this is also its final
    // order; deeper layers start from it so ties stay deterministic.
    for layer in layers.iter_mut() {
        layer.sort();
    }

    // One forward pass. Parent positions are read from whatever layer the parent actually
    // occupies (not necessarily the immediately preceding one), which matters for edges that
    // skip ranks.
    for i in 1..layers.len() {
        let current = layers[i].clone();
        let mut orders: Vec<f64> = Vec::with_capacity(current.len());
        for (index, id) in current.iter().enumerate() {
            let order = barycenter(table, layers, id).unwrap_or(index as f64);
            orders.push(order);
        }

        for (id, &order) in current.iter().zip(&orders) {
            if let Some(node) = table.get_mut(id) {
                node.order = order;
            }
        }

        let mut keyed: Vec<(f64, String)> = orders.into_iter().zip(current).collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        layers[i] = keyed.into_iter().map(|(_, id)| id).collect();
    }
}

/// Mean of the resolvable parents' current index within their own layer, or `None` when no
/// parent resolves (the node then keeps its current index as its order).
fn barycenter(table: &NodeTable, layers: &[Vec<String>], id: &str) -> Option<f64> {
    let node = table.get(id)?;
    let mut sum = 0.0;
    let mut count = 0usize;
    for pid in &node.parents {
        let Some(parent) = table.get(pid.as_str()) else {
            continue;
        };
        let index = layers
            .get(parent.layer)
            .and_then(|layer| layer.iter().position(|v| v == pid))
            .unwrap_or(0);
        sum += index as f64;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
