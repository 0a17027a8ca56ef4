// SPDX-License-Identifier: MIT OR Apache-2.0
//! Edge definitions for the flow graph.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// Unique identifier for an edge.
///
/// Like node ids, edge ids are numbered by creation order (`edge-<k>`)
/// and never reused, so parallel edges between the same endpoints stay
/// distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(String);

impl EdgeId {
    /// Build the id for the `seq`-th edge created by a store.
    pub(crate) fn from_seq(seq: u64) -> Self {
        Self(format!("edge-{seq}"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for EdgeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Decoration drawn on an edge endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeMarker {
    /// Filled arrowhead pointing at the target node.
    ArrowClosed,
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique edge id.
    pub id: EdgeId,
    /// Source node id.
    pub source: NodeId,
    /// Target node id.
    pub target: NodeId,
    /// Decoration on the target end.
    pub marker_end: EdgeMarker,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            source,
            target,
            marker_end: EdgeMarker::ArrowClosed,
        }
    }

    /// Check if this edge involves a specific node.
    pub fn involves_node(&self, node_id: &NodeId) -> bool {
        self.source == *node_id || self.target == *node_id
    }
}
