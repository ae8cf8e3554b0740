//! Edge path generation.
//!
//! One straight two-point path per resolvable parent→child pair: bottom-center anchor of the
//! source to top-center anchor of the target. No routing around intervening nodes; smoothing
//! into curves is a presentation concern.

use crate::model::{LayoutConfig, Point, RenderedEdge};
use crate::table::NodeTable;

pub fn collect_edges(table: &NodeTable, config: &LayoutConfig) -> Vec<RenderedEdge> {
    let half_height = config.node_height / 2.0;
    let mut edges: Vec<RenderedEdge> = Vec::new();

    for target in table.values() {
        for pid in &target.parents {
            let Some(source) = table.get(pid.as_str()) else {
                continue;
            };
            edges.push(RenderedEdge {
                source: source.id.clone(),
                target: target.id.clone(),
                points: vec![
                    Point {
                        x: source.x,
                        y: source.y + half_height,
                    },
                    Point {
                        x: target.x,
                        y: target.y - half_height,
                    },
                ],
            });
        }
    }

    edges
}
