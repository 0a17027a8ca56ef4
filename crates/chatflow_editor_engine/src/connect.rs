// SPDX-License-Identifier: MIT OR Apache-2.0
//! Drag-to-connect handling.
//!
//! Connection is deliberately permissive: any handle-to-handle drag
//! becomes an edge, duplicates and self-loops included. The save gate
//! is the only place flow correctness is enforced.

use crate::state::FlowEditor;
use chatflow_editor_graph::NodeId;

/// An in-flight connect drag, anchored at the source handle it
/// started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDrag {
    /// Node whose source handle the drag started from.
    pub source: NodeId,
}

impl FlowEditor {
    /// Begin a connect drag from `source`'s output handle.
    ///
    /// Nothing changes in the graph until the drag ends on a target
    /// handle; the renderer draws the rubber band itself.
    pub fn connect_start(&mut self, source: &NodeId) {
        self.pending_connect = Some(ConnectionDrag {
            source: source.clone(),
        });
    }

    /// Finish the in-flight connect drag.
    ///
    /// `target` is the node whose target handle the pointer was over
    /// when the drag ended, or `None` when it ended in the void - the
    /// drag is then abandoned with no state change.
    pub fn connect_end(&mut self, target: Option<&NodeId>) {
        let Some(drag) = self.pending_connect.take() else {
            return;
        };
        match target {
            Some(target) => self.connect(&drag.source, target),
            None => tracing::debug!(source = %drag.source, "connect drag abandoned"),
        }
    }

    /// Insert an edge from `source` to `target`.
    ///
    /// Always accepted; the store only drops attempts whose endpoints
    /// are stale ids no longer present.
    pub fn connect(&mut self, source: &NodeId, target: &NodeId) {
        if self.graph.add_edge(source, target).is_some() {
            self.touch();
        }
    }

    /// The in-flight connect drag, if one is active.
    pub fn pending_connect(&self) -> Option<&ConnectionDrag> {
        self.pending_connect.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatflow_editor_graph::NodeKind;

    fn editor_with_pair() -> (FlowEditor, NodeId, NodeId) {
        let mut editor = FlowEditor::new();
        let a = editor.graph.add_node(NodeKind::Message, [0.0, 0.0]);
        let b = editor.graph.add_node(NodeKind::Message, [100.0, 0.0]);
        (editor, a, b)
    }

    #[test]
    fn test_drag_completes_into_edge() {
        let (mut editor, a, b) = editor_with_pair();
        editor.connect_start(&a);
        assert_eq!(editor.pending_connect().unwrap().source, a);

        editor.connect_end(Some(&b));

        assert!(editor.pending_connect().is_none());
        assert_eq!(editor.graph().edge_count(), 1);
        let edge = editor.graph().edges().next().unwrap();
        assert_eq!(edge.source, a);
        assert_eq!(edge.target, b);
    }

    #[test]
    fn test_drag_released_in_void_is_abandoned() {
        let (mut editor, a, _) = editor_with_pair();
        let before = editor.revision();

        editor.connect_start(&a);
        editor.connect_end(None);

        assert!(editor.pending_connect().is_none());
        assert_eq!(editor.graph().edge_count(), 0);
        assert_eq!(editor.revision(), before);
    }

    #[test]
    fn test_repeat_connect_makes_parallel_edges() {
        let (mut editor, a, b) = editor_with_pair();
        editor.connect(&a, &b);
        editor.connect(&a, &b);

        assert_eq!(editor.graph().edge_count(), 2);
        let ids: Vec<_> = editor.graph().edges().map(|e| e.id.clone()).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_self_loop_is_accepted() {
        let (mut editor, a, _) = editor_with_pair();
        editor.connect(&a, &a);
        assert_eq!(editor.graph().edge_count(), 1);
    }

    #[test]
    fn test_connect_to_stale_id_is_absorbed() {
        let (mut editor, a, _) = editor_with_pair();
        let before = editor.revision();
        editor.connect(&a, &NodeId::from("node-77"));
        assert_eq!(editor.graph().edge_count(), 0);
        assert_eq!(editor.revision(), before);
    }

    #[test]
    fn test_end_without_start_is_dropped() {
        let (mut editor, _, b) = editor_with_pair();
        editor.connect_end(Some(&b));
        assert_eq!(editor.graph().edge_count(), 0);
    }
}
