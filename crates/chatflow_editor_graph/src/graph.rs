// SPDX-License-Identifier: MIT OR Apache-2.0
//! The graph store owning the canonical node and edge containers.

use crate::edge::{Edge, EdgeId};
use crate::node::{Node, NodeId, NodeKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The canonical flow graph of one editor session.
///
/// The store is the sole owner of the node and edge containers; hosts
/// and renderers only ever see shared references or [`FlowSnapshot`]s.
/// Mutations preserve referential integrity: an edge never outlives
/// either of its endpoints, and never references a node that was not
/// in the store when the edge was inserted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeId, Edge>,
    /// Nodes ever created; drives `node-<k>` ids and default labels.
    node_seq: u64,
    /// Edges ever created; drives `edge-<k>` ids.
    edge_seq: u64,
}

impl FlowGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node of `kind` at `position` and append it.
    ///
    /// Always succeeds. Id and default label are numbered by the
    /// running creation count, not the current length, so ids stay
    /// unique across deletions.
    pub fn add_node(&mut self, kind: NodeKind, position: [f32; 2]) -> NodeId {
        self.node_seq += 1;
        let id = NodeId::from_seq(self.node_seq);
        let node = Node::new(
            id.clone(),
            kind,
            position,
            kind.default_label(self.node_seq),
        );
        self.nodes.insert(id.clone(), node);
        id
    }

    /// Remove a node and every edge whose source or target it is.
    ///
    /// Returns the removed node, or `None` (changing nothing) when the
    /// id is absent. Insertion order of the survivors is preserved.
    pub fn remove_node(&mut self, id: &NodeId) -> Option<Node> {
        let node = self.nodes.shift_remove(id)?;
        self.edges.retain(|_, edge| !edge.involves_node(id));
        Some(node)
    }

    /// Replace the label of the node with `id`.
    ///
    /// Returns `false` (changing nothing) when the id is absent.
    pub fn update_node_label(&mut self, id: &NodeId, label: impl Into<String>) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.data.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Set the display flag mirroring selection on a single node.
    ///
    /// Returns `false` when the id is absent.
    pub fn set_node_selected(&mut self, id: &NodeId, selected: bool) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.data.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Mark exactly `id` as selected and every other node as not, in a
    /// single pass over the container.
    ///
    /// Returns `false` (changing nothing) when the id is absent.
    pub fn select_only(&mut self, id: &NodeId) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        for (node_id, node) in &mut self.nodes {
            node.data.selected = node_id == id;
        }
        true
    }

    /// Force every node's display flag off.
    pub fn deselect_all(&mut self) {
        for node in self.nodes.values_mut() {
            node.data.selected = false;
        }
    }

    /// Move a node to a new canvas position.
    ///
    /// Returns `false` when the id is absent.
    pub fn move_node(&mut self, id: &NodeId, position: [f32; 2]) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Insert an edge from `source` to `target`, arrow on the target
    /// end.
    ///
    /// Parallel edges and self-loops are allowed; correctness checks
    /// are deferred to save time. Returns `None` without inserting
    /// when either endpoint is not currently in the store.
    pub fn add_edge(&mut self, source: &NodeId, target: &NodeId) -> Option<EdgeId> {
        if !self.nodes.contains_key(source) || !self.nodes.contains_key(target) {
            return None;
        }
        self.edge_seq += 1;
        let id = EdgeId::from_seq(self.edge_seq);
        let edge = Edge::new(id.clone(), source.clone(), target.clone());
        self.edges.insert(id.clone(), edge);
        Some(id)
    }

    /// Remove a single edge.
    ///
    /// Returns the removed edge, or `None` when the id is absent.
    pub fn remove_edge(&mut self, id: &EdgeId) -> Option<Edge> {
        self.edges.shift_remove(id)
    }

    /// Get a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get an edge by id.
    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Check whether a node id is present.
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether any edge ends at `id`.
    pub fn has_incoming(&self, id: &NodeId) -> bool {
        self.edges.values().any(|edge| edge.target == *id)
    }

    /// Clone the current state into an immutable snapshot.
    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            nodes: self.nodes.values().cloned().collect(),
            edges: self.edges.values().cloned().collect(),
        }
    }
}

/// The full (nodes, edges) pair captured at a point in time.
///
/// Immutable once captured; used for save-time validation and the
/// hand-off to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    /// Nodes in insertion order.
    pub nodes: Vec<Node>,
    /// Edges in insertion order.
    pub edges: Vec<Edge>,
}
