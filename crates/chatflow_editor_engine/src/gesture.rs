// SPDX-License-Identifier: MIT OR Apache-2.0
//! Renderer gesture events and their dispatch.

use crate::state::FlowEditor;
use chatflow_editor_graph::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// A discrete user input event reported by the canvas renderer.
///
/// Gestures arrive in host delivery order and are applied atomically,
/// one at a time. Label edits, deletion, and saving come from the side
/// panel and are plain [`FlowEditor`] methods rather than gestures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    /// A node was clicked.
    NodeClick {
        /// Clicked node.
        id: NodeId,
    },
    /// A node was dragged to a new canvas position.
    NodeMove {
        /// Dragged node.
        id: NodeId,
        /// New position in canvas coordinates.
        position: [f32; 2],
    },
    /// A connect drag started from a node's source handle.
    ConnectStart {
        /// Node the drag started from.
        source: NodeId,
    },
    /// A connect drag ended, on a target handle or in the void.
    ConnectEnd {
        /// Node under the pointer, if the drag ended on one.
        target: Option<NodeId>,
    },
    /// A palette drag moved over the canvas. Acknowledged, nothing
    /// changes until the drop lands.
    DragOver,
    /// A palette item was dropped on the canvas.
    Drop {
        /// Node-kind tag carried by the drag payload, if any.
        tag: Option<String>,
        /// Pointer position in screen coordinates.
        pointer: [f32; 2],
        /// Canvas top-left corner in screen coordinates.
        origin: [f32; 2],
    },
    /// An edge was removed on the canvas.
    EdgeRemove {
        /// Removed edge.
        id: EdgeId,
    },
}

impl FlowEditor {
    /// Route a renderer gesture to the matching operation.
    pub fn apply(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::NodeClick { id } => self.select_node(&id),
            Gesture::NodeMove { id, position } => self.move_node(&id, position),
            Gesture::ConnectStart { source } => self.connect_start(&source),
            Gesture::ConnectEnd { target } => self.connect_end(target.as_ref()),
            Gesture::DragOver => {}
            Gesture::Drop {
                tag,
                pointer,
                origin,
            } => {
                self.drop_from_palette(tag.as_deref(), pointer, origin);
            }
            Gesture::EdgeRemove { id } => self.remove_edge(&id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_sequence_builds_a_flow() {
        let mut editor = FlowEditor::new();

        editor.apply(Gesture::DragOver);
        editor.apply(Gesture::Drop {
            tag: Some("message".into()),
            pointer: [120.0, 80.0],
            origin: [20.0, 20.0],
        });
        editor.apply(Gesture::Drop {
            tag: Some("message".into()),
            pointer: [320.0, 80.0],
            origin: [20.0, 20.0],
        });

        let a = NodeId::from("node-1");
        let b = NodeId::from("node-2");
        editor.apply(Gesture::ConnectStart { source: a.clone() });
        editor.apply(Gesture::ConnectEnd {
            target: Some(b.clone()),
        });
        editor.apply(Gesture::NodeMove {
            id: b.clone(),
            position: [250.0, 90.0],
        });
        editor.apply(Gesture::NodeClick { id: a.clone() });

        assert_eq!(editor.graph().node_count(), 2);
        assert_eq!(editor.graph().edge_count(), 1);
        assert_eq!(editor.graph().node(&b).unwrap().position, [250.0, 90.0]);
        assert_eq!(editor.selected_node().unwrap().id, a);
    }

    #[test]
    fn test_edge_remove_gesture() {
        let mut editor = FlowEditor::new();
        editor.apply(Gesture::Drop {
            tag: Some("message".into()),
            pointer: [0.0, 0.0],
            origin: [0.0, 0.0],
        });
        editor.apply(Gesture::ConnectStart {
            source: NodeId::from("node-1"),
        });
        editor.apply(Gesture::ConnectEnd {
            target: Some(NodeId::from("node-1")),
        });
        assert_eq!(editor.graph().edge_count(), 1);

        let edge = editor.graph().edges().next().unwrap().id.clone();
        editor.apply(Gesture::EdgeRemove { id: edge });
        assert_eq!(editor.graph().edge_count(), 0);
    }

    #[test]
    fn test_payload_free_drop_gesture_is_ignored() {
        let mut editor = FlowEditor::new();
        editor.apply(Gesture::Drop {
            tag: None,
            pointer: [10.0, 10.0],
            origin: [0.0, 0.0],
        });
        assert_eq!(editor.graph().node_count(), 0);
    }
}
