/// Material slot traversal.
///
/// Walks a rooted object graph and yields one `SlotVisit` per material slot:
/// the root's own slots first (in array order), then every descendant in
/// depth-first pre-order following each node's child order.
///
/// The walk is a plain iterator: finite, lazy, and restartable (clone it
/// before consuming, or call `walk` again). Nodes are visited at most once
/// even when the graph repeats a child reference or contains a cycle.

use std::sync::Arc;
use rustc_hash::FxHashSet;
use crate::error::Result;
use crate::resource::{IdentityResolver, Material, MaterialIdentity};
use crate::{matremap_bail, matremap_trace};
use super::node::NodeKey;
use super::scene_graph::SceneGraph;

// ===== VISIT RECORD =====

/// One visited material slot
#[derive(Debug, Clone)]
pub struct SlotVisit {
    /// Node owning the renderer
    pub node: NodeKey,
    /// Index into the renderer's slot array
    pub slot: usize,
    /// Material currently assigned to the slot
    pub material: Arc<Material>,
    /// Resolved identity of that material (may be empty)
    pub identity: MaterialIdentity,
}

// ===== ITERATOR =====

#[derive(Clone, Copy)]
struct SlotCursor<'a> {
    node: NodeKey,
    slots: &'a [Arc<Material>],
    index: usize,
}

/// Lazy iterator over every material slot reachable from a root
pub struct MaterialSlots<'a, R: IdentityResolver + ?Sized> {
    graph: &'a SceneGraph,
    resolver: &'a R,
    root: NodeKey,
    include_inactive: bool,
    trace: bool,
    pending: Vec<NodeKey>,
    visited: FxHashSet<NodeKey>,
    current: Option<SlotCursor<'a>>,
}

/// Start a walk over `root` and its descendants.
///
/// # Errors
///
/// Returns an error if `root` is not a node of `graph`.
pub fn walk<'a, R>(
    graph: &'a SceneGraph,
    root: NodeKey,
    resolver: &'a R,
) -> Result<MaterialSlots<'a, R>>
where
    R: IdentityResolver + ?Sized,
{
    if !graph.contains(root) {
        matremap_bail!("matremap::Walker", InvalidNode, "Root node {:?} not found", root);
    }

    Ok(MaterialSlots {
        graph,
        resolver,
        root,
        include_inactive: true,
        trace: false,
        pending: vec![root],
        visited: FxHashSet::default(),
        current: None,
    })
}

impl<'a, R: IdentityResolver + ?Sized> MaterialSlots<'a, R> {
    /// Skip inactive nodes (and everything below them)
    pub fn active_only(mut self) -> Self {
        self.include_inactive = false;
        self
    }

    /// Log every visited slot at TRACE level
    pub fn traced(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Rewind to the root
    pub fn restart(&mut self) {
        self.pending.clear();
        self.pending.push(self.root);
        self.visited.clear();
        self.current = None;
    }

    /// Pop the next unvisited node and make its slots current
    fn enter_next_node(&mut self) -> Option<()> {
        let graph = self.graph;
        loop {
            let key = self.pending.pop()?;
            if !self.visited.insert(key) {
                continue;
            }
            // Dangling child references contribute nothing
            let Some(node) = graph.node(key) else {
                continue;
            };
            if !self.include_inactive && !node.is_active() {
                continue;
            }

            // Reverse push so the first child is popped first
            for child in node.children().iter().rev() {
                if !self.visited.contains(child) {
                    self.pending.push(*child);
                }
            }

            if let Some(renderer) = node.renderer() {
                self.current = Some(SlotCursor {
                    node: key,
                    slots: &renderer.shared_materials()[..],
                    index: 0,
                });
            }
            return Some(());
        }
    }
}

impl<'a, R: IdentityResolver + ?Sized> Iterator for MaterialSlots<'a, R> {
    type Item = SlotVisit;

    fn next(&mut self) -> Option<SlotVisit> {
        loop {
            if let Some(cursor) = self.current {
                if let Some(material) = cursor.slots.get(cursor.index) {
                    self.current = Some(SlotCursor { index: cursor.index + 1, ..cursor });

                    let identity = self.resolver.resolve(material);
                    if self.trace {
                        matremap_trace!("matremap::Walker",
                            "material - {} [{}] slot {} of {:?}: {}",
                            material.name(), material.shader(), cursor.index, cursor.node, identity);
                    }
                    return Some(SlotVisit {
                        node: cursor.node,
                        slot: cursor.index,
                        material: material.clone(),
                        identity,
                    });
                }
                self.current = None;
            }
            self.enter_next_node()?;
        }
    }
}

impl<'a, R: IdentityResolver + ?Sized> Clone for MaterialSlots<'a, R> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            resolver: self.resolver,
            root: self.root,
            include_inactive: self.include_inactive,
            trace: self.trace,
            pending: self.pending.clone(),
            visited: self.visited.clone(),
            current: self.current,
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
