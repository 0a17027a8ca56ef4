// SPDX-License-Identifier: MIT OR Apache-2.0
//! Palette drop handling.

use crate::state::FlowEditor;
use chatflow_editor_graph::{NodeId, NodeKind};

impl FlowEditor {
    /// Handle a palette item dropped at `pointer` (screen coordinates)
    /// over a canvas whose top-left corner sits at `origin`.
    ///
    /// The node lands at `pointer - origin` in canvas coordinates.
    /// Drops carrying no tag, or a tag naming no known node kind, are
    /// ignored; that is the renderer reporting a drag that was never
    /// ours.
    pub fn drop_from_palette(
        &mut self,
        tag: Option<&str>,
        pointer: [f32; 2],
        origin: [f32; 2],
    ) -> Option<NodeId> {
        let kind = NodeKind::from_tag(tag?)?;
        let position = [pointer[0] - origin[0], pointer[1] - origin[1]];
        let id = self.graph.add_node(kind, position);
        tracing::info!(id = %id, ?position, "node created from palette drop");
        self.touch();
        Some(id)
    }
}
