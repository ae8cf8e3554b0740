//! Public label and geometry types for the layout engine.
//!
//! These are intentionally lightweight and `Clone`-friendly; the JSON field names match the
//! document format produced by the editing and generation collaborators (`parentIds`, `type`).

use serde::{Deserialize, Serialize};

/// Presentation tag carried on input nodes. The engine never interprets it; it rides along
/// into [`RenderedNode`] for the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Default,
    Process,
    Decision,
    Output,
}

/// One input node record. `parent_ids` may name ids that are absent from the input; the
/// engine skips such references everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNodeData {
    pub id: String,
    #[serde(default, rename = "parentIds")]
    pub parent_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Geometry knobs for one layout invocation. The engine does not reject non-positive values;
/// they propagate arithmetically into the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    #[serde(rename = "nodeWidth")]
    pub node_width: f64,
    #[serde(rename = "nodeHeight")]
    pub node_height: f64,
    /// Vertical gap between rank centers beyond the node height.
    #[serde(rename = "rankSep")]
    pub rank_sep: f64,
    /// Horizontal gap between adjacent node centers beyond the node width.
    #[serde(rename = "nodeSep")]
    pub node_sep: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 120.0,
            node_height: 60.0,
            rank_sep: 70.0,
            node_sep: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Horizontal rank band metadata: `y` is the vertical center shared by all nodes of the rank,
/// `height` the vertical extent reserved for it including inter-rank spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerInfo {
    pub index: usize,
    pub y: f64,
    pub height: f64,
}

/// A positioned node: final center coordinates plus the unmodified source record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub data: GraphNodeData,
}

/// A routable edge path. The engine emits exactly two points, the source's bottom-center
/// anchor and the target's top-center anchor; smoothing is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedEdge {
    pub source: String,
    pub target: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub nodes: Vec<RenderedNode>,
    pub edges: Vec<RenderedEdge>,
    pub layers: Vec<LayerInfo>,
    pub width: f64,
    pub height: f64,
}

impl LayoutResult {
    /// The result for an empty node list: everything empty, zero extents, no padding.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            layers: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }
}
