// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the flow graph.

use serde::{Deserialize, Serialize};

/// Unique identifier for a node.
///
/// The store hands out ids of the form `node-<k>`, where `k` counts
/// successful insertions over the store's lifetime. Ids of deleted
/// nodes are never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Build the id for the `seq`-th node created by a store.
    pub(crate) fn from_seq(seq: u64) -> Self {
        Self(format!("node-{seq}"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind of node on the canvas.
///
/// A single kind exists today; the palette tag keeps the door open for
/// more without changing the drop path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A text message sent to the end user.
    Message,
}

impl NodeKind {
    /// Resolve a palette drag tag to a node kind.
    ///
    /// Returns `None` for tags naming no known kind, which callers
    /// treat as an ignored drop.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    /// The drag payload tag the palette carries for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Message => "message",
        }
    }

    /// Display title shown in the node header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Message => "Send Message",
        }
    }

    /// Default label for the `seq`-th node created in a session.
    pub(crate) fn default_label(self, seq: u64) -> String {
        match self {
            Self::Message => format!("text message {seq}"),
        }
    }
}

/// Editable payload of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    /// Message text shown in the node body and the settings panel.
    pub label: String,
    /// Whether the node is drawn highlighted. Mirrors the engine's
    /// selection reference, which is authoritative.
    pub selected: bool,
}

/// A node instance on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance id.
    pub id: NodeId,
    /// Node kind.
    pub kind: NodeKind,
    /// Position in canvas coordinates.
    pub position: [f32; 2],
    /// Editable payload.
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(id: NodeId, kind: NodeKind, position: [f32; 2], label: String) -> Self {
        Self {
            id,
            kind,
            position,
            data: NodeData {
                label,
                selected: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        assert_eq!(NodeKind::from_tag("message"), Some(NodeKind::Message));
        assert_eq!(NodeKind::from_tag(NodeKind::Message.tag()), Some(NodeKind::Message));
        assert_eq!(NodeKind::from_tag("carousel"), None);
        assert_eq!(NodeKind::from_tag(""), None);
    }

    #[test]
    fn test_id_display() {
        let id = NodeId::from_seq(7);
        assert_eq!(id.as_str(), "node-7");
        assert_eq!(id.to_string(), "node-7");
        assert_eq!(NodeId::from("node-7"), id);
    }
}
