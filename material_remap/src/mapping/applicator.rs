/// Mapping application.
///
/// Rewrites material slots of an object graph according to a mapping. Slot
/// arrays may be shared between renderers, so a multi-slot array is never
/// edited in place: the renderer receives a modified copy.

use std::sync::Arc;
use crate::error::Result;
use crate::{matremap_debug, matremap_info};
use crate::resource::{IdentityResolver, MaterialIdentity, ProjectMaterialIndex};
use crate::scene::{walk, NodeKey, SceneGraph, SharedMaterialArray, SlotVisit};
use super::diagnostics::RemapWarning;
use super::table::Mapping;

const LOG_SOURCE: &str = "matremap::Applicator";

/// One rewritten slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotChange {
    pub node: NodeKey,
    pub slot: usize,
    pub source: MaterialIdentity,
    pub destination: MaterialIdentity,
}

/// Outcome of an apply pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Rewritten slots in walk order
    pub replaced: Vec<SlotChange>,

    /// Destinations that could not be found
    pub warnings: Vec<RemapWarning>,
}

impl ApplyReport {
    pub fn replaced_count(&self) -> usize {
        self.replaced.len()
    }
}

/// Apply `mapping` to every slot under `root`.
///
/// Single pass: a slot rewritten to a destination that is itself a mapping
/// key is not rewritten again.
///
/// # Errors
///
/// Returns an error if `root` is not in `graph`.
pub fn apply<R>(
    graph: &mut SceneGraph,
    root: NodeKey,
    mapping: &Mapping,
    project_materials: &ProjectMaterialIndex,
    resolver: &R,
) -> Result<ApplyReport>
where
    R: IdentityResolver + ?Sized,
{
    let visits: Vec<SlotVisit> = walk(graph, root, resolver)?.collect();
    Ok(apply_to_visits(graph, &visits, mapping, project_materials))
}

/// Apply `mapping` to an already gathered list of visited slots
pub fn apply_to_visits(
    graph: &mut SceneGraph,
    visits: &[SlotVisit],
    mapping: &Mapping,
    project_materials: &ProjectMaterialIndex,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for visit in visits {
        let source = &visit.identity;
        if source.is_empty() {
            continue;
        }
        let Some(destination) = mapping.get(source) else {
            continue;
        };
        if destination.is_empty() || destination == source {
            continue;
        }

        let Some(material) = project_materials.material(destination) else {
            let warning = RemapWarning::UnresolvedDestination {
                node: visit.node,
                slot: visit.slot,
                source: source.clone(),
                destination: destination.clone(),
            };
            warning.report(LOG_SOURCE);
            report.warnings.push(warning);
            continue;
        };

        let Some(renderer) = graph.renderer_mut(visit.node) else {
            matremap_debug!(LOG_SOURCE, "{:?} lost its renderer, skipping slot {}",
                visit.node, visit.slot);
            continue;
        };
        let slot_count = renderer.slot_count();
        if visit.slot >= slot_count {
            matremap_debug!(LOG_SOURCE, "{:?} slot {} is out of range ({} slots)",
                visit.node, visit.slot, slot_count);
            continue;
        }

        if slot_count == 1 {
            renderer.set_shared_material(Arc::clone(material));
        } else {
            let mut slots = renderer.shared_materials().to_vec();
            slots[visit.slot] = Arc::clone(material);
            let array: SharedMaterialArray = Arc::from(slots);
            renderer.set_shared_materials(array);
        }

        report.replaced.push(SlotChange {
            node: visit.node,
            slot: visit.slot,
            source: source.clone(),
            destination: destination.clone(),
        });
    }

    matremap_info!(LOG_SOURCE, "Replaced {} slots ({} warnings)",
        report.replaced_count(), report.warnings.len());
    report
}

#[cfg(test)]
#[path = "applicator_tests.rs"]
mod tests;
