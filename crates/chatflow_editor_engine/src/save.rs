// SPDX-License-Identifier: MIT OR Apache-2.0
//! Save-time validation and the persistence hand-off.
//!
//! The one structural rule of a flow is enforced here and nowhere
//! else: a message node with no incoming edge is an entry point, and a
//! flow may have at most one. Everything the connection path accepted
//! earlier is judged at save time against that rule.

use crate::state::FlowEditor;
use chatflow_editor_graph::{FlowSnapshot, NodeKind};

/// Receives save outcomes.
///
/// The transport is the host's business (console, dialog, network
/// call); the engine only promises a validated snapshot on success and
/// a human-readable message on rejection.
pub trait FlowSink {
    /// A validated snapshot was committed.
    fn flow_saved(&mut self, snapshot: &FlowSnapshot);

    /// Validation rejected the graph; nothing was committed.
    fn save_rejected(&mut self, message: &str);
}

/// Sink that reports save outcomes through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl FlowSink for LogSink {
    fn flow_saved(&mut self, snapshot: &FlowSnapshot) {
        tracing::info!(
            nodes = snapshot.nodes.len(),
            edges = snapshot.edges.len(),
            "flow saved"
        );
    }

    fn save_rejected(&mut self, message: &str) {
        tracing::warn!(%message, "save rejected");
    }
}

/// Why a save was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    /// More than one message node has no incoming edge, so the flow
    /// has no single starting point.
    #[error("more than one node has an empty target handle")]
    MultipleEmptyTargets {
        /// How many nodes have an empty target handle.
        count: usize,
    },
}

impl FlowEditor {
    /// Validate the graph and hand a snapshot of it to `sink`.
    ///
    /// With two or more entry points the save is refused, `sink` is
    /// told why, and the graph, selection, and revision are left
    /// exactly as they were; the user keeps editing and retries. On
    /// success the selection is cleared, every node's display flag is
    /// forced off, and the captured snapshot goes to the sink.
    pub fn save(&mut self, sink: &mut dyn FlowSink) -> Result<FlowSnapshot, SaveError> {
        let empty_targets = self
            .graph
            .nodes()
            .filter(|node| node.kind == NodeKind::Message && !self.graph.has_incoming(&node.id))
            .count();
        if empty_targets > 1 {
            let err = SaveError::MultipleEmptyTargets {
                count: empty_targets,
            };
            sink.save_rejected(&err.to_string());
            return Err(err);
        }

        self.selection = None;
        self.graph.deselect_all();
        self.touch();

        let snapshot = self.graph.snapshot();
        sink.flow_saved(&snapshot);
        Ok(snapshot)
    }
}
