//! Coordinate assignment.
//!
//! Converts (layer, order) into Cartesian centers: uniform rank spacing on the y axis,
//! horizontally centered layers on the x axis. Spacing is content-independent; only the
//! configured node box and separations matter.

use crate::model::{LayerInfo, LayoutConfig};
use crate::table::NodeTable;

/// Computed extents prior to canvas padding, plus per-rank band metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Extents {
    pub width: f64,
    pub height: f64,
    pub layers: Vec<LayerInfo>,
}

pub fn assign_coordinates(
    table: &mut NodeTable,
    layers: &[Vec<String>],
    config: &LayoutConfig,
) -> Extents {
    let LayoutConfig {
        node_width,
        node_height,
        rank_sep,
        node_sep,
    } = *config;

    let layer_widths: Vec<f64> = layers
        .iter()
        .map(|layer| {
            if layer.is_empty() {
                0.0
            } else {
                layer.len() as f64 * node_width + (layer.len() - 1) as f64 * node_sep
            }
        })
        .collect();
    let max_width = layer_widths.iter().copied().fold(0.0_f64, f64::max);

    let mut infos: Vec<LayerInfo> = Vec::new();
    for (layer_index, layer) in layers.iter().enumerate() {
        if layer.is_empty() {
            continue;
        }
        let x_offset = (max_width - layer_widths[layer_index]) / 2.0;
        let y = layer_index as f64 * (node_height + rank_sep) + node_height / 2.0;

        for (node_index, id) in layer.iter().enumerate() {
            if let Some(node) = table.get_mut(id) {
                node.x = x_offset + node_index as f64 * (node_width + node_sep) + node_width / 2.0;
                node.y = y;
            }
        }

        infos.push(LayerInfo {
            index: layer_index,
            y,
            height: node_height + rank_sep,
        });
    }

    // One rank-height slot per bucket, trailing gap included. Kept as-is rather than
    // trimming the last gap; the canvas padding downstream absorbs the difference.
    let height = layers.len() as f64 * (node_height + rank_sep);

    Extents {
        width: max_width,
        height,
        layers: infos,
    }
}
