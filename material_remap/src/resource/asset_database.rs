/// In-memory project asset database.
///
/// Stands in for the host authoring tool's asset catalog: every imported
/// material asset has a path, a stable identity and a canonical loaded
/// instance. The database is also the default IdentityResolver: a material
/// resolves to the identity registered for the path it was loaded from.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::{matremap_bail, matremap_debug};
use super::identity::{IdentityResolver, MaterialIdentity};
use super::material::{Material, MaterialDesc};

// ===== CATALOG TRAIT =====

/// Read-only view of a project's material catalog.
///
/// This is what a remap session needs from the host: enumerate material
/// assets, load them, and resolve instances back to identities.
pub trait AssetCatalog: IdentityResolver {
    /// All material asset identities, in catalog order
    fn material_identities(&self) -> Vec<MaterialIdentity>;

    /// Load the canonical instance of a material asset
    fn load_material(&self, identity: &MaterialIdentity) -> Option<Arc<Material>>;

    /// Asset path for an identity
    fn asset_path(&self, identity: &MaterialIdentity) -> Option<&str>;
}

// ===== ASSET DATABASE =====

struct MaterialAsset {
    path: String,
    identity: MaterialIdentity,
    material: Arc<Material>,
}

/// Project-wide material catalog (identity <-> path <-> loaded instance)
pub struct AssetDatabase {
    /// Assets in import order
    assets: Vec<MaterialAsset>,
    by_identity: FxHashMap<MaterialIdentity, usize>,
    by_path: FxHashMap<String, usize>,
}

impl AssetDatabase {
    /// Create a new empty asset database
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            by_identity: FxHashMap::default(),
            by_path: FxHashMap::default(),
        }
    }

    /// Import a material asset at `path`, deriving its identity from the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty, already imported, or if the
    /// derived identity collides with an existing asset.
    pub fn import_material(
        &mut self,
        path: impl Into<String>,
        desc: MaterialDesc,
    ) -> Result<MaterialIdentity> {
        let path = path.into();
        let identity = MaterialIdentity::from_asset_path(&path);
        self.import_material_with_identity(path, identity.clone(), desc)?;
        Ok(identity)
    }

    /// Import a material asset with a caller-chosen identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the path or identity is empty, or either is
    /// already registered.
    pub fn import_material_with_identity(
        &mut self,
        path: impl Into<String>,
        identity: MaterialIdentity,
        desc: MaterialDesc,
    ) -> Result<()> {
        let path = path.into();

        if path.is_empty() {
            matremap_bail!("matremap::AssetDatabase", InvalidAsset,
                "Cannot import material '{}' with an empty path", desc.name);
        }
        if identity.is_empty() {
            matremap_bail!("matremap::AssetDatabase", InvalidAsset,
                "Cannot import '{}' with an empty identity", path);
        }
        if self.by_path.contains_key(&path) {
            matremap_bail!("matremap::AssetDatabase", InvalidAsset,
                "Asset path '{}' already imported", path);
        }
        if let Some(&existing) = self.by_identity.get(&identity) {
            matremap_bail!("matremap::AssetDatabase", InvalidAsset,
                "Identity {} of '{}' already used by '{}'",
                identity, path, self.assets[existing].path);
        }

        let material = Arc::new(Material::from_asset(desc, path.clone()));
        let index = self.assets.len();
        self.by_path.insert(path.clone(), index);
        self.by_identity.insert(identity.clone(), index);

        matremap_debug!("matremap::AssetDatabase", "Imported '{}' as {}", path, identity);

        self.assets.push(MaterialAsset { path, identity, material });
        Ok(())
    }

    /// Remove an asset from the project.
    ///
    /// Instances already referenced by a scene stay alive, but resolve to the
    /// empty identity from now on. Returns false if the identity is unknown.
    pub fn remove_material(&mut self, identity: &MaterialIdentity) -> bool {
        let Some(index) = self.by_identity.remove(identity) else {
            return false;
        };
        let removed = self.assets.remove(index);
        self.by_path.remove(&removed.path);

        // Indices after the removed asset shift down by one
        for position in self.by_identity.values_mut().chain(self.by_path.values_mut()) {
            if *position > index {
                *position -= 1;
            }
        }

        matremap_debug!("matremap::AssetDatabase", "Removed '{}' ({})", removed.path, identity);
        true
    }

    /// Create a new in-memory instance of an asset.
    ///
    /// The instance is distinct from the canonical one but resolves to the
    /// same identity.
    pub fn instantiate(&self, identity: &MaterialIdentity) -> Option<Arc<Material>> {
        let asset = &self.assets[*self.by_identity.get(identity)?];
        let desc = MaterialDesc {
            name: asset.material.name().to_string(),
            shader: asset.material.shader().to_string(),
        };
        Some(Arc::new(Material::from_asset(desc, asset.path.clone())))
    }

    /// Identity registered for an asset path
    pub fn identity_for_path(&self, path: &str) -> Option<&MaterialIdentity> {
        let index = self.by_path.get(path)?;
        Some(&self.assets[*index].identity)
    }

    /// Number of imported material assets
    pub fn material_count(&self) -> usize {
        self.assets.len()
    }
}

impl Default for AssetDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityResolver for AssetDatabase {
    fn resolve(&self, material: &Material) -> MaterialIdentity {
        material
            .source_path()
            .and_then(|path| self.identity_for_path(path))
            .cloned()
            .unwrap_or_default()
    }
}

impl AssetCatalog for AssetDatabase {
    fn material_identities(&self) -> Vec<MaterialIdentity> {
        self.assets.iter().map(|asset| asset.identity.clone()).collect()
    }

    fn load_material(&self, identity: &MaterialIdentity) -> Option<Arc<Material>> {
        let index = self.by_identity.get(identity)?;
        Some(self.assets[*index].material.clone())
    }

    fn asset_path(&self, identity: &MaterialIdentity) -> Option<&str> {
        let index = self.by_identity.get(identity)?;
        Some(self.assets[*index].path.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "asset_database_tests.rs"]
mod tests;
