//! Layered DAG layout.
//!
//! A simplified Sugiyama pipeline for directed acyclic graphs described as flat node records
//! with parent references: memoized longest-path ranking with cycle tolerance, a one-pass
//! barycenter ordering heuristic seeded alphabetically, centered coordinate assignment, and
//! two-point edge paths. The single entry point is [`compute_layout`]; [`decode`] turns the
//! collaborators' JSON documents into typed input.

pub mod decode;
pub mod edges;
pub mod model;
pub mod order;
pub mod pipeline;
pub mod position;
pub mod rank;
pub mod table;

pub use model::{
    GraphNodeData, LayerInfo, LayoutConfig, LayoutResult, NodeKind, Point, RenderedEdge,
    RenderedNode,
};
pub use pipeline::{CANVAS_PADDING, compute_layout};
pub use table::{NodeTable, WorkingNode, build_table};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
