/// Mesh renderer component (surface owner).
///
/// Holds one material per renderable sub-surface. The slot array is stored
/// behind an `Arc`, so several renderers may share the very same array.
/// Writes therefore never touch an array in place: they build a new array
/// and install it, leaving every other holder of the old array unchanged.

use std::sync::Arc;
use crate::resource::Material;

/// Material slot array, possibly shared between renderers
pub type SharedMaterialArray = Arc<[Arc<Material>]>;

/// Renderer component owning an ordered material slot array
#[derive(Debug, Clone)]
pub struct MeshRenderer {
    shared_materials: SharedMaterialArray,
}

impl MeshRenderer {
    /// Create a renderer with its own slot array
    pub fn new(materials: Vec<Arc<Material>>) -> Self {
        Self {
            shared_materials: Arc::from(materials),
        }
    }

    /// Create a renderer referencing an existing (possibly shared) slot array
    pub fn with_shared_array(array: SharedMaterialArray) -> Self {
        Self { shared_materials: array }
    }

    /// Current slot array
    pub fn shared_materials(&self) -> &SharedMaterialArray {
        &self.shared_materials
    }

    /// Material in slot 0
    pub fn shared_material(&self) -> Option<&Arc<Material>> {
        self.shared_materials.first()
    }

    /// Assign the material of slot 0.
    ///
    /// An empty or single-slot renderer ends up with exactly this one
    /// material; on a multi-slot renderer the other slots are kept.
    pub fn set_shared_material(&mut self, material: Arc<Material>) {
        if self.shared_materials.len() <= 1 {
            self.shared_materials = Arc::from(vec![material]);
        } else {
            let mut slots = self.shared_materials.to_vec();
            slots[0] = material;
            self.shared_materials = Arc::from(slots);
        }
    }

    /// Install a whole slot array
    pub fn set_shared_materials(&mut self, array: SharedMaterialArray) {
        self.shared_materials = array;
    }

    pub fn slot_count(&self) -> usize {
        self.shared_materials.len()
    }

    /// Whether both renderers reference the same slot array
    pub fn shares_array_with(&self, other: &MeshRenderer) -> bool {
        Arc::ptr_eq(&self.shared_materials, &other.shared_materials)
    }
}

#[cfg(test)]
#[path = "mesh_renderer_tests.rs"]
mod tests;
