/// Source -> destination material substitution table.
///
/// Keyed by persistent identity, never by runtime handle, so a mapping
/// saved in one session can be applied in another.

use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::{matremap_bail, matremap_debug};
use crate::resource::{MaterialIdentity, ProjectMaterialIndex};
use super::unique_set::UniqueMaterialSet;

/// Finite map from source identity to destination identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: FxHashMap<MaterialIdentity, MaterialIdentity>,
}

impl Mapping {
    /// Create a new empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `source` to `destination`, returning the previous destination
    pub fn insert(
        &mut self,
        source: MaterialIdentity,
        destination: MaterialIdentity,
    ) -> Option<MaterialIdentity> {
        self.entries.insert(source, destination)
    }

    /// Destination for a source identity
    pub fn get(&self, source: &MaterialIdentity) -> Option<&MaterialIdentity> {
        self.entries.get(source)
    }

    pub fn contains_source(&self, source: &MaterialIdentity) -> bool {
        self.entries.contains_key(source)
    }

    pub fn remove(&mut self, source: &MaterialIdentity) -> Option<MaterialIdentity> {
        self.entries.remove(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (source, destination) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&MaterialIdentity, &MaterialIdentity)> {
        self.entries.iter()
    }

    /// Entries sorted by source identity
    pub fn sorted_entries(&self) -> Vec<(&MaterialIdentity, &MaterialIdentity)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<(MaterialIdentity, MaterialIdentity)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (MaterialIdentity, MaterialIdentity)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Build a mapping from a selection.
///
/// `selection[i]` picks the project entry that object material `i` maps
/// to. Identity mappings (same source and destination) are kept: they mean
/// "no change" and apply skips them. Unselected entries (`None`) and object
/// materials with an empty identity produce no mapping entry.
///
/// # Errors
///
/// Returns an error if `selection` and `object_materials` differ in length,
/// or if a selected index is outside `project_materials`.
pub fn generate(
    object_materials: &UniqueMaterialSet,
    project_materials: &ProjectMaterialIndex,
    selection: &[Option<usize>],
) -> Result<Mapping> {
    if selection.len() != object_materials.len() {
        matremap_bail!("matremap::Mapping", InvalidSelection,
            "Selection has {} entries but the object has {} materials",
            selection.len(), object_materials.len());
    }

    let mut mapping = Mapping::new();
    for (slot, (source, selected)) in object_materials.iter().zip(selection).enumerate() {
        let Some(project_entry) = *selected else {
            continue;
        };
        let Some(destination) = project_materials.get(project_entry) else {
            matremap_bail!("matremap::Mapping", InvalidSelection,
                "Selection {} points at project entry {} but the project has {} materials",
                slot, project_entry, project_materials.len());
        };
        if source.identity().is_empty() {
            continue;
        }
        mapping.insert(source.identity().clone(), destination.identity().clone());
    }

    matremap_debug!("matremap::Mapping", "Generated mapping with {} entries", mapping.len());
    Ok(mapping)
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
