/// Resource-level material type.
///
/// A Material is an in-memory instance of a surface description. It may be
/// backed by a persisted asset (it then remembers the asset path it was
/// loaded from) or be procedural (created at runtime, no backing asset).
///
/// Instances are shared as `Arc<Material>`. Two loads of the same asset give
/// two distinct instances that resolve to the same identity.

use std::sync::Arc;
use super::identity::MaterialIdentity;

// ===== MATERIAL =====

/// Material instance
#[derive(Debug)]
pub struct Material {
    name: String,
    shader: String,
    source_path: Option<String>,
}

// ===== DESCRIPTORS =====

/// Material creation descriptor
#[derive(Debug, Clone)]
pub struct MaterialDesc {
    pub name: String,
    pub shader: String,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self {
            name: "New Material".to_string(),
            shader: "Standard".to_string(),
        }
    }
}

// ===== MATERIAL IMPLEMENTATION =====

impl Material {
    /// Create a material instance backed by the asset at `source_path`
    /// (internal use by AssetDatabase)
    pub(crate) fn from_asset(desc: MaterialDesc, source_path: String) -> Self {
        Self {
            name: desc.name,
            shader: desc.shader,
            source_path: Some(source_path),
        }
    }

    /// Create a procedural material with no backing asset.
    ///
    /// Procedural materials always resolve to the empty identity.
    pub fn procedural(desc: MaterialDesc) -> Arc<Self> {
        Arc::new(Self {
            name: desc.name,
            shader: desc.shader,
            source_path: None,
        })
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shader family name
    pub fn shader(&self) -> &str {
        &self.shader
    }

    /// Asset path this instance was loaded from (None for procedural materials)
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }
}

// ===== MATERIAL REF =====

/// A material handle paired with its resolved identity.
///
/// Only lives for the duration of a session; never persisted.
#[derive(Debug, Clone)]
pub struct MaterialRef {
    material: Arc<Material>,
    identity: MaterialIdentity,
}

impl MaterialRef {
    pub fn new(material: Arc<Material>, identity: MaterialIdentity) -> Self {
        Self { material, identity }
    }

    /// Get the material instance
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Get the resolved identity (may be empty)
    pub fn identity(&self) -> &MaterialIdentity {
        &self.identity
    }

    /// Material display name
    pub fn name(&self) -> &str {
        self.material.name()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
