use crate::core::models::ids::SpeciesId;
use std::collections::HashMap;

/// Mapping from specification-side species to their canonical counterparts.
///
/// Built once by identity resolution; specification species without a structural
/// match are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesMap {
    entries: HashMap<SpeciesId, SpeciesId>,
}

impl SpeciesMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `canonical` as the counterpart of `spec`, returning any previous entry.
    pub fn insert(&mut self, spec: SpeciesId, canonical: SpeciesId) -> Option<SpeciesId> {
        self.entries.insert(spec, canonical)
    }

    pub fn get(&self, spec: SpeciesId) -> Option<SpeciesId> {
        self.entries.get(&spec).copied()
    }

    pub fn contains(&self, spec: SpeciesId) -> bool {
        self.entries.contains_key(&spec)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpeciesId, SpeciesId)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
