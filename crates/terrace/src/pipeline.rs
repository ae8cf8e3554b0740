//! The layout pipeline.
//!
//! Stages run strictly forward over a per-call working table: build → rank → group → order →
//! position → edges → assembly. Every invocation is a full, stateless recomputation; nothing
//! survives between calls, so concurrent callers never share state.
//!
//! The pipeline is total over its input domain: unresolvable parents are skipped, cycles are
//! short-circuited during ranking, duplicate ids resolve last-write-wins, and degenerate
//! config values propagate arithmetically instead of erroring.

use crate::model::{GraphNodeData, LayoutConfig, LayoutResult, RenderedNode};
use crate::{edges, order, position, rank, table};

/// Fixed margin added to the computed extents, reserved for visual margins consumed by the
/// embedding renderer.
pub const CANVAS_PADDING: f64 = 200.0;

/// Computes a full layout for `nodes` under `config`.
pub fn compute_layout(nodes: &[GraphNodeData], config: &LayoutConfig) -> LayoutResult {
    if nodes.is_empty() {
        return LayoutResult::empty();
    }

    let mut table = table::build_table(nodes, config);
    rank::assign_layers(&mut table);
    let mut layers = order::group_by_layer(&table);
    order::order_layers(&mut table, &mut layers);
    let extents = position::assign_coordinates(&mut table, &layers, config);
    let edges = edges::collect_edges(&table, config);

    let nodes = table
        .into_values()
        .map(|n| RenderedNode {
            id: n.id,
            x: n.x,
            y: n.y,
            data: n.data,
        })
        .collect();

    LayoutResult {
        nodes,
        edges,
        layers: extents.layers,
        width: extents.width + CANVAS_PADDING,
        height: extents.height + CANVAS_PADDING,
    }
}
