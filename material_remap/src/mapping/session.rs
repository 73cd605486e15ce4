/// Remap editing session.
///
/// Holds everything one remap session works on: the root object, the
/// object's unique materials, the project material index and the current
/// selection (one optional project entry per object material).
///
/// Every operation either succeeds or leaves the session as it was.

use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::{matremap_bail, matremap_err, matremap_info};
use crate::resource::{AssetCatalog, IdentityResolver, ProjectMaterialIndex};
use crate::scene::{walk, MaterialSlots, NodeKey, SceneGraph, SlotVisit};
use super::applicator::{apply_to_visits, ApplyReport};
use super::diagnostics::RemapWarning;
use super::store::{MappingStore, MAPPING_EXTENSION};
use super::table::{generate, Mapping};
use super::unique_set::UniqueMaterialSet;

const LOG_SOURCE: &str = "matremap::Session";

/// Session options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemapConfig {
    /// Walk inactive nodes too
    pub include_inactive: bool,
    /// Log every visited slot at TRACE level
    pub trace_slots: bool,
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            include_inactive: true,
            trace_slots: false,
        }
    }
}

/// State of one remap editing session
#[derive(Debug, Clone)]
pub struct RemapSession {
    config: RemapConfig,
    root: NodeKey,
    object_materials: UniqueMaterialSet,
    project_materials: ProjectMaterialIndex,
    selection: Vec<Option<usize>>,
}

impl RemapSession {
    /// Open a session on `root` and collect its materials
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not in `graph`.
    pub fn open<C>(
        graph: &SceneGraph,
        root: NodeKey,
        catalog: &C,
        config: RemapConfig,
    ) -> Result<Self>
    where
        C: AssetCatalog + ?Sized,
    {
        if !graph.contains(root) {
            matremap_bail!(LOG_SOURCE, InvalidNode, "Root node {:?} not found", root);
        }

        let mut session = Self {
            config,
            root,
            object_materials: UniqueMaterialSet::new(),
            project_materials: ProjectMaterialIndex::new(),
            selection: Vec::new(),
        };
        session.reset(graph, catalog)?;
        Ok(session)
    }

    /// Recollect the object materials and refresh the project index.
    ///
    /// Each object material starts preselected on the project entry with the
    /// same identity, if there is one.
    pub fn reset<C>(&mut self, graph: &SceneGraph, catalog: &C) -> Result<()>
    where
        C: AssetCatalog + ?Sized,
    {
        let object_materials = UniqueMaterialSet::from_slots(self.slots(graph, catalog)?);
        self.project_materials.rescan(catalog);

        self.selection = object_materials
            .iter()
            .map(|entry| {
                if entry.identity().is_empty() {
                    None
                } else {
                    self.project_materials.position(entry.identity())
                }
            })
            .collect();
        self.object_materials = object_materials;

        matremap_info!(LOG_SOURCE, "Object has {} materials, project has {}",
            self.object_materials.len(), self.project_materials.len());
        Ok(())
    }

    fn slots<'a, R>(&self, graph: &'a SceneGraph, resolver: &'a R) -> Result<MaterialSlots<'a, R>>
    where
        R: IdentityResolver + ?Sized,
    {
        let slots = walk(graph, self.root, resolver)?.traced(self.config.trace_slots);
        Ok(if self.config.include_inactive { slots } else { slots.active_only() })
    }

    // ===== ACCESSORS =====

    pub fn root(&self) -> NodeKey {
        self.root
    }

    pub fn config(&self) -> &RemapConfig {
        &self.config
    }

    pub fn object_materials(&self) -> &UniqueMaterialSet {
        &self.object_materials
    }

    pub fn project_materials(&self) -> &ProjectMaterialIndex {
        &self.project_materials
    }

    /// Selected project entry per object material
    pub fn selection(&self) -> &[Option<usize>] {
        &self.selection
    }

    pub fn object_material_names(&self) -> Vec<&str> {
        self.object_materials.names()
    }

    pub fn project_material_names(&self) -> Vec<&str> {
        self.project_materials.names()
    }

    // ===== SELECTION =====

    /// Map object material `object_slot` to project entry `project_entry`
    pub fn select(&mut self, object_slot: usize, project_entry: usize) -> Result<()> {
        if object_slot >= self.selection.len() {
            matremap_bail!(LOG_SOURCE, InvalidSelection,
                "Object material {} out of range ({} materials)",
                object_slot, self.selection.len());
        }
        if project_entry >= self.project_materials.len() {
            matremap_bail!(LOG_SOURCE, InvalidSelection,
                "Project entry {} out of range ({} materials)",
                project_entry, self.project_materials.len());
        }
        self.selection[object_slot] = Some(project_entry);
        Ok(())
    }

    /// Leave object material `object_slot` unmapped
    pub fn clear_selection(&mut self, object_slot: usize) -> Result<()> {
        let slot = self.selection.get_mut(object_slot).ok_or_else(|| {
            matremap_err!(LOG_SOURCE, InvalidSelection,
                "Object material {} out of range", object_slot)
        })?;
        *slot = None;
        Ok(())
    }

    // ===== MAPPING =====

    /// Mapping described by the current selection
    pub fn generate_mapping(&self) -> Result<Mapping> {
        generate(&self.object_materials, &self.project_materials, &self.selection)
    }

    /// Rewrite the object's slots according to the current selection
    pub fn apply<C>(&self, graph: &mut SceneGraph, catalog: &C) -> Result<ApplyReport>
    where
        C: AssetCatalog + ?Sized,
    {
        let mapping = self.generate_mapping()?;
        let visits: Vec<SlotVisit> = self.slots(graph, catalog)?.collect();
        Ok(apply_to_visits(graph, &visits, &mapping, &self.project_materials))
    }

    /// Suggested file name for saving: `<root name>.mapping`
    pub fn default_mapping_file_name(&self, graph: &SceneGraph) -> Result<String> {
        let node = graph.node(self.root).ok_or_else(|| {
            matremap_err!(LOG_SOURCE, InvalidNode, "Root node {:?} not found", self.root)
        })?;
        Ok(format!("{}.{}", node.name(), MAPPING_EXTENSION))
    }

    /// Save the current selection as a mapping file
    pub fn save_mapping(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let mapping = self.generate_mapping()?;
        MappingStore::save(path, &mapping)
    }

    /// Load a mapping file into the selection.
    ///
    /// Pairs that do not fit the current object or project are skipped and
    /// returned as warnings.
    pub fn load_mapping(&mut self, path: impl AsRef<Path>) -> Result<Vec<RemapWarning>> {
        let loaded = MappingStore::load(path)?;
        let reconciliation = MappingStore::reconcile_loaded(
            &loaded,
            &self.object_materials,
            &self.project_materials,
            &self.selection,
        )?;
        self.selection = reconciliation.selection;
        Ok(reconciliation.warnings)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
