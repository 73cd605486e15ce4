/// Session-scoped index of every material asset visible in the project.
///
/// Built incrementally: each rescan appends identities it has not seen yet
/// and never drops stale ones, so indices handed out earlier in a session
/// (selection entries) stay valid for the whole session.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::{matremap_debug, matremap_warn};
use super::asset_database::AssetCatalog;
use super::identity::MaterialIdentity;
use super::material::{Material, MaterialRef};

/// Append-only identity -> material cache for one editing session
#[derive(Debug, Clone, Default)]
pub struct ProjectMaterialIndex {
    entries: Vec<MaterialRef>,
    positions: FxHashMap<MaterialIdentity, usize>,
}

impl ProjectMaterialIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every catalog material not already indexed.
    ///
    /// Returns the number of newly appended entries. Materials the catalog
    /// lists but cannot load are skipped with a warning.
    pub fn rescan<C: AssetCatalog + ?Sized>(&mut self, catalog: &C) -> usize {
        let mut appended = 0;

        for identity in catalog.material_identities() {
            if identity.is_empty() || self.positions.contains_key(&identity) {
                continue;
            }
            let Some(material) = catalog.load_material(&identity) else {
                matremap_warn!("matremap::ProjectMaterialIndex",
                    "Material {} is listed but could not be loaded", identity);
                continue;
            };

            self.positions.insert(identity.clone(), self.entries.len());
            self.entries.push(MaterialRef::new(material, identity));
            appended += 1;
        }

        matremap_debug!("matremap::ProjectMaterialIndex",
            "Rescan appended {} materials ({} total)", appended, self.entries.len());
        appended
    }

    /// Index of the entry with this identity
    pub fn position(&self, identity: &MaterialIdentity) -> Option<usize> {
        self.positions.get(identity).copied()
    }

    /// Entry at an index
    pub fn get(&self, index: usize) -> Option<&MaterialRef> {
        self.entries.get(index)
    }

    /// Material instance for an identity
    pub fn material(&self, identity: &MaterialIdentity) -> Option<&Arc<Material>> {
        let index = self.position(identity)?;
        Some(self.entries[index].material())
    }

    pub fn contains(&self, identity: &MaterialIdentity) -> bool {
        self.positions.contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialRef> {
        self.entries.iter()
    }

    /// Display labels in index order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name()).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "project_index_tests.rs"]
mod tests;
