/// Mapping persistence and reconciliation.
///
/// Saves and loads `.mapping` files, and folds a loaded mapping back into a
/// selection over the current object and project materials.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::{matremap_bail, matremap_debug, matremap_err, matremap_info};
use crate::resource::ProjectMaterialIndex;
use super::codec;
use super::diagnostics::RemapWarning;
use super::table::Mapping;
use super::unique_set::UniqueMaterialSet;

/// File extension of saved mappings
pub const MAPPING_EXTENSION: &str = "mapping";

const LOG_SOURCE: &str = "matremap::MappingStore";

/// Selection rebuilt from a loaded mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// New selection, one entry per object material
    pub selection: Vec<Option<usize>>,

    /// Pairs that could not be honored
    pub warnings: Vec<RemapWarning>,
}

/// File-backed mapping storage
pub struct MappingStore;

impl MappingStore {
    /// Write a mapping to `path`.
    ///
    /// A path without extension gets `.mapping` appended. Returns the path
    /// actually written.
    pub fn save(path: impl AsRef<Path>, mapping: &Mapping) -> Result<PathBuf> {
        let path = with_default_extension(path.as_ref());
        let bytes = codec::serialize(mapping);

        let mut file = File::create(&path).map_err(|e| {
            matremap_err!(LOG_SOURCE, IoError,
                "Failed to create {}: {}", path.display(), e)
        })?;
        file.write_all(&bytes).map_err(|e| {
            matremap_err!(LOG_SOURCE, IoError,
                "Failed to write {}: {}", path.display(), e)
        })?;

        matremap_info!(LOG_SOURCE, "Saved {} mapping entries to {}",
            mapping.len(), path.display());
        Ok(path)
    }

    /// Read a mapping from `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Mapping> {
        let path = path.as_ref();
        let mut bytes = Vec::new();
        {
            let mut file = File::open(path).map_err(|e| {
                matremap_err!(LOG_SOURCE, IoError,
                    "Failed to open {}: {}", path.display(), e)
            })?;
            file.read_to_end(&mut bytes).map_err(|e| {
                matremap_err!(LOG_SOURCE, IoError,
                    "Failed to read {}: {}", path.display(), e)
            })?;
        }

        let mapping = codec::deserialize(&bytes)?;
        matremap_info!(LOG_SOURCE, "Loaded {} mapping entries from {}",
            mapping.len(), path.display());
        Ok(mapping)
    }

    /// Turn a loaded mapping into a selection.
    ///
    /// Starts from `current_selection` and, for every pair (in source
    /// order), points the object material at its destination in the
    /// project. A source the object does not use, or a destination the
    /// project does not contain, leaves the selection alone and produces a
    /// warning. Each warning is also logged.
    ///
    /// # Errors
    ///
    /// Returns an error if `current_selection` does not have one entry per
    /// object material.
    pub fn reconcile_loaded(
        loaded: &Mapping,
        object_materials: &UniqueMaterialSet,
        project_materials: &ProjectMaterialIndex,
        current_selection: &[Option<usize>],
    ) -> Result<Reconciliation> {
        if current_selection.len() != object_materials.len() {
            matremap_bail!(LOG_SOURCE, InvalidSelection,
                "Selection has {} entries but the object has {} materials",
                current_selection.len(), object_materials.len());
        }

        let mut selection = current_selection.to_vec();
        let mut warnings = Vec::new();

        for (source, destination) in loaded.sorted_entries() {
            let Some(object_slot) = object_materials.position(source) else {
                warnings.push(RemapWarning::SourceNotOnObject { source: source.clone() });
                continue;
            };
            let Some(project_entry) = project_materials.position(destination) else {
                warnings.push(RemapWarning::DestinationNotInProject {
                    source: source.clone(),
                    destination: destination.clone(),
                });
                continue;
            };
            selection[object_slot] = Some(project_entry);
        }

        for warning in &warnings {
            warning.report(LOG_SOURCE);
        }
        matremap_debug!(LOG_SOURCE, "Reconciled {} pairs with {} warnings",
            loaded.len(), warnings.len());

        Ok(Reconciliation { selection, warnings })
    }
}

fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(MAPPING_EXTENSION)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
