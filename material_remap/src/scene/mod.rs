//! Scene module
//!
//! Provides the object graph (nodes with mesh renderers) and the material
//! slot walker used by the remap passes.

mod node;
mod mesh_renderer;
mod scene_graph;
mod walker;

pub use node::{Node, NodeKey, NodeFlags};
pub use mesh_renderer::{MeshRenderer, SharedMaterialArray};
pub use scene_graph::SceneGraph;
pub use walker::{walk, MaterialSlots, SlotVisit};
