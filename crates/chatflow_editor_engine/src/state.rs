// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor state: the graph store plus the selection reference.

use crate::connect::ConnectionDrag;
use chatflow_editor_graph::{EdgeId, FlowGraph, Node, NodeId};

/// The editing engine of one editor session.
///
/// Owns the graph store, the selection reference, and any in-flight
/// connect drag. Every mutation goes through `&mut self`, so a session
/// is single-threaded by construction; the host drives it one gesture
/// at a time and no gesture can observe a half-applied predecessor.
///
/// Selection is modeled twice: the [`selection`](Self::selected_node)
/// reference here is the source of truth, and each node's `selected`
/// flag mirrors it for the renderer's benefit.
#[derive(Debug, Default)]
pub struct FlowEditor {
    pub(crate) graph: FlowGraph,
    pub(crate) selection: Option<NodeId>,
    pub(crate) pending_connect: Option<ConnectionDrag>,
    pub(crate) revision: u64,
}

impl FlowEditor {
    /// Create an engine with an empty graph and nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current graph.
    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    /// Monotonic change counter, bumped on every applied mutation.
    ///
    /// Hosts compare it against the last value they rendered instead
    /// of diffing the containers.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn touch(&mut self) {
        self.revision += 1;
    }

    /// Select `id`, replacing any previous selection.
    ///
    /// Turns the chosen node's display flag on and every other node's
    /// off in a single pass. Unknown ids are stale renderer echoes and
    /// are dropped without touching the current selection.
    pub fn select_node(&mut self, id: &NodeId) {
        if !self.graph.select_only(id) {
            tracing::debug!(id = %id, "click on unknown node dropped");
            return;
        }
        self.selection = Some(id.clone());
        self.touch();
    }

    /// Forget the selection reference, returning to the unselected
    /// state.
    ///
    /// Display flags are left as they are; they only go off on the
    /// next selection or when a save commits.
    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.touch();
        }
    }

    /// The selected node, if any.
    pub fn selected_node(&self) -> Option<&Node> {
        self.graph.node(self.selection.as_ref()?)
    }

    /// Label of the selected node, mirrored into the settings panel
    /// editor.
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_node().map(|node| node.data.label.as_str())
    }

    /// Whether a node is selected. Drives which side panel the host
    /// shows: the palette when false, the label editor when true.
    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    /// Replace the selected node's label with `text`.
    ///
    /// Dropped when nothing is selected.
    pub fn edit_selected_label(&mut self, text: impl Into<String>) {
        let Some(id) = self.selection.clone() else {
            tracing::debug!("label edit with no selection dropped");
            return;
        };
        if self.graph.update_node_label(&id, text) {
            self.touch();
        }
    }

    /// Delete the selected node, cascading to every edge that touches
    /// it, and return to the unselected state.
    ///
    /// Dropped when nothing is selected.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selection.take() else {
            return;
        };
        if let Some(node) = self.graph.remove_node(&id) {
            tracing::info!(id = %id, label = %node.data.label, "node deleted");
        }
        self.touch();
    }

    /// Move a node to a new canvas position (node drag).
    pub fn move_node(&mut self, id: &NodeId, position: [f32; 2]) {
        if self.graph.move_node(id, position) {
            self.touch();
        }
    }

    /// Remove a single edge (canvas edge-removal gesture).
    pub fn remove_edge(&mut self, id: &EdgeId) {
        if self.graph.remove_edge(id).is_some() {
            self.touch();
        }
    }
}
