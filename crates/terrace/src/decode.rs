//! Decoding of the external JSON graph document.
//!
//! Both upstream collaborators — the editing surface and the generation service — produce a
//! bare JSON array of node records. A wrapper object carrying explicit `nodes` plus an
//! optional (possibly partial) `config` is also accepted. Decoding is the caller-side
//! validation boundary: the engine itself never errors, so anything malformed must be
//! surfaced here, before invocation.

use serde::Deserialize;

use crate::model::{GraphNodeData, LayoutConfig};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected document shape: expected an array of nodes or an object with a `nodes` field")]
    UnexpectedShape,
}

/// A decoded input document: the node records plus the document's own config, if it carried
/// one. Field defaults fill in whatever a partial config omits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<GraphNodeData>,
    #[serde(default)]
    pub config: Option<LayoutConfig>,
}

pub fn decode_document(input: &str) -> Result<GraphDocument> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    match value {
        serde_json::Value::Array(_) => Ok(GraphDocument {
            nodes: serde_json::from_value(value)?,
            config: None,
        }),
        serde_json::Value::Object(ref map) if map.contains_key("nodes") => {
            Ok(serde_json::from_value(value)?)
        }
        _ => Err(Error::UnexpectedShape),
    }
}
