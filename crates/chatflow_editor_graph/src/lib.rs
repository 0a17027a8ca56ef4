// SPDX-License-Identifier: MIT OR Apache-2.0
//! Flow-graph data model for `ChatFlow` Editor.
//!
//! This crate owns the canonical graph state of an editing session:
//! - Message nodes with canvas positions and editable payloads
//! - Directed edges with a terminal arrow marker
//! - The [`FlowGraph`] store applying structural mutations with
//!   referential integrity
//! - Immutable [`FlowSnapshot`]s for validation and persistence
//!
//! Rendering, gesture handling, and save-time validation live in the
//! `chatflow_editor_engine` crate on top of this model.

pub mod edge;
pub mod graph;
pub mod node;

pub use edge::{Edge, EdgeId, EdgeMarker};
pub use graph::{FlowGraph, FlowSnapshot};
pub use node::{Node, NodeData, NodeId, NodeKind};
