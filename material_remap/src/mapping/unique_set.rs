/// Unique material discovery.
///
/// Folds a slot walk into the ordered set of distinct materials an object
/// uses, keyed by identity, in first-discovery order.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::resource::{IdentityResolver, MaterialIdentity, MaterialRef};
use crate::scene::{walk, NodeKey, SceneGraph, SlotVisit};

/// Distinct materials referenced by an object graph
#[derive(Debug, Clone, Default)]
pub struct UniqueMaterialSet {
    entries: Vec<MaterialRef>,
    /// Positions of non-empty identities only
    positions: FxHashMap<MaterialIdentity, usize>,
}

impl UniqueMaterialSet {
    /// Create a new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from visited slots.
    ///
    /// A slot is kept when its identity was not seen before. Slots with an
    /// empty identity cannot be matched to an asset, so they are never
    /// merged with each other: every distinct instance keeps its own entry.
    pub fn from_slots<I>(visits: I) -> Self
    where
        I: IntoIterator<Item = SlotVisit>,
    {
        let mut set = Self::new();
        for visit in visits {
            set.insert(visit);
        }
        set
    }

    fn insert(&mut self, visit: SlotVisit) {
        if visit.identity.is_empty() {
            let known = self.entries.iter().any(|entry| {
                entry.identity().is_empty() && Arc::ptr_eq(entry.material(), &visit.material)
            });
            if !known {
                self.entries.push(MaterialRef::new(visit.material, visit.identity));
            }
            return;
        }

        if self.positions.contains_key(&visit.identity) {
            return;
        }
        self.positions.insert(visit.identity.clone(), self.entries.len());
        self.entries.push(MaterialRef::new(visit.material, visit.identity));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MaterialRef> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialRef> {
        self.entries.iter()
    }

    /// Position of the entry with this (non-empty) identity
    pub fn position(&self, identity: &MaterialIdentity) -> Option<usize> {
        self.positions.get(identity).copied()
    }

    pub fn contains(&self, identity: &MaterialIdentity) -> bool {
        self.positions.contains_key(identity)
    }

    /// Display labels in discovery order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name()).collect()
    }
}

/// Collect the unique materials of `root` and all its descendants
pub fn collect_unique<R>(
    graph: &SceneGraph,
    root: NodeKey,
    resolver: &R,
) -> Result<UniqueMaterialSet>
where
    R: IdentityResolver + ?Sized,
{
    Ok(UniqueMaterialSet::from_slots(walk(graph, root, resolver)?))
}

#[cfg(test)]
#[path = "unique_set_tests.rs"]
mod tests;
