/// SceneGraph: the object graph materials are remapped on.
///
/// Uses a SlotMap for O(1) insert/lookup with stable keys. Children are
/// stored as references, so the host may expose the same child twice or
/// under several parents; traversal code must not assume a strict tree.

use slotmap::SlotMap;
use crate::error::Result;
use crate::{matremap_bail, matremap_err};
use super::mesh_renderer::MeshRenderer;
use super::node::{Node, NodeKey};

/// In-memory scene graph
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, Node>,
}

impl SceneGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Create a detached node. New nodes are active and have no renderer.
    pub fn create_node(&mut self, name: impl Into<String>) -> NodeKey {
        self.nodes.insert(Node::new(name.into()))
    }

    /// Create a node and append it to `parent`'s children
    pub fn create_child(&mut self, parent: NodeKey, name: impl Into<String>) -> Result<NodeKey> {
        if !self.nodes.contains_key(parent) {
            matremap_bail!("matremap::SceneGraph", InvalidNode,
                "Parent node {:?} not found", parent);
        }
        let child = self.create_node(name);
        self.add_child(parent, child)?;
        Ok(child)
    }

    /// Append a child reference to `parent`.
    ///
    /// The same child may be referenced more than once.
    ///
    /// # Errors
    ///
    /// Returns an error if either key is unknown or `parent == child`.
    pub fn add_child(&mut self, parent: NodeKey, child: NodeKey) -> Result<()> {
        if parent == child {
            matremap_bail!("matremap::SceneGraph", InvalidNode,
                "Node {:?} cannot be its own child", parent);
        }
        if !self.nodes.contains_key(child) {
            matremap_bail!("matremap::SceneGraph", InvalidNode,
                "Child node {:?} not found", child);
        }
        let node = self.nodes.get_mut(parent)
            .ok_or_else(|| matremap_err!("matremap::SceneGraph", InvalidNode,
                "Parent node {:?} not found", parent))?;
        node.push_child(child);
        Ok(())
    }

    /// Get a node by key
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Get a mutable node by key
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Child references of a node
    pub fn children(&self, key: NodeKey) -> Option<&[NodeKey]> {
        self.nodes.get(key).map(|node| node.children())
    }

    /// Attach (or replace) a node's mesh renderer
    pub fn set_renderer(&mut self, key: NodeKey, renderer: MeshRenderer) -> Result<()> {
        let node = self.nodes.get_mut(key)
            .ok_or_else(|| matremap_err!("matremap::SceneGraph", InvalidNode,
                "Node {:?} not found", key))?;
        node.set_renderer(renderer);
        Ok(())
    }

    /// Mesh renderer of a node
    pub fn renderer(&self, key: NodeKey) -> Option<&MeshRenderer> {
        self.nodes.get(key)?.renderer()
    }

    /// Mutable mesh renderer of a node
    pub fn renderer_mut(&mut self, key: NodeKey) -> Option<&mut MeshRenderer> {
        self.nodes.get_mut(key)?.renderer_mut()
    }

    /// Detach a node's mesh renderer
    pub fn remove_renderer(&mut self, key: NodeKey) -> Option<MeshRenderer> {
        self.nodes.get_mut(key)?.take_renderer()
    }

    /// Set a node's ACTIVE flag. Returns false if the key is invalid.
    pub fn set_active(&mut self, key: NodeKey, active: bool) -> bool {
        if let Some(node) = self.nodes.get_mut(key) {
            node.set_active(active);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
#[path = "scene_graph_tests.rs"]
mod tests;
