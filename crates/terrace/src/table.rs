//! The per-invocation working node table.

use indexmap::IndexMap;

use crate::model::{GraphNodeData, LayoutConfig};

/// Insertion-ordered id → node map. Inserting a duplicate id overwrites the earlier entry
/// while keeping the first occurrence's position, so later stages see each id exactly once.
pub type NodeTable = IndexMap<String, WorkingNode>;

/// Engine-internal node state, created fresh for every layout call. `layer`, `order`, `x`
/// and `y` start zeroed and are filled in by the pipeline stages.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingNode {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub layer: usize,
    pub order: f64,
    pub parents: Vec<String>,
    pub data: GraphNodeData,
}

pub fn build_table(nodes: &[GraphNodeData], config: &LayoutConfig) -> NodeTable {
    let mut table = NodeTable::with_capacity(nodes.len());
    for data in nodes {
        table.insert(
            data.id.clone(),
            WorkingNode {
                id: data.id.clone(),
                width: config.node_width,
                height: config.node_height,
                x: 0.0,
                y: 0.0,
                layer: 0,
                order: 0.0,
                parents: data.parent_ids.clone(),
                data: data.clone(),
            },
        );
    }
    table
}
