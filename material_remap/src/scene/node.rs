/// Scene node types.
///
/// A Node is a named graph vertex with child references and an optional
/// MeshRenderer component (the surface owner whose material slots get
/// remapped).

use bitflags::bitflags;
use slotmap::new_key_type;
use super::mesh_renderer::MeshRenderer;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a Node within a SceneGraph.
    ///
    /// Keys remain valid even after other nodes are removed.
    pub struct NodeKey;
}

// ===== FLAGS =====

bitflags! {
    /// Node state flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u32 {
        /// Node is active in the hierarchy (walked by `active_only`)
        const ACTIVE = 1 << 0;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        NodeFlags::ACTIVE
    }
}

// ===== NODE =====

/// A scene graph node
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    flags: NodeFlags,
    /// Child references in enumeration order (may repeat)
    children: Vec<NodeKey>,
    renderer: Option<MeshRenderer>,
}

impl Node {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            flags: NodeFlags::default(),
            children: Vec::new(),
            renderer: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    pub fn is_active(&self) -> bool {
        self.flags.contains(NodeFlags::ACTIVE)
    }

    pub fn set_active(&mut self, active: bool) {
        self.flags.set(NodeFlags::ACTIVE, active);
    }

    /// Child references in enumeration order
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: NodeKey) {
        self.children.push(child);
    }

    /// Mesh renderer component, if any
    pub fn renderer(&self) -> Option<&MeshRenderer> {
        self.renderer.as_ref()
    }

    pub fn renderer_mut(&mut self) -> Option<&mut MeshRenderer> {
        self.renderer.as_mut()
    }

    pub(crate) fn set_renderer(&mut self, renderer: MeshRenderer) {
        self.renderer = Some(renderer);
    }

    pub(crate) fn take_renderer(&mut self) -> Option<MeshRenderer> {
        self.renderer.take()
    }
}
