use super::ids::SpeciesId;
use super::species::Species;
use slotmap::SlotMap;

/// Arena owning every species of a job.
///
/// Specification-side species and canonical-network species live side by side in the
/// same registry; which side a species belongs to is determined by the list that
/// refers to it (`Job::initial_species` or the canonical species list), never by the
/// species itself. Species are never removed during a reconciliation.
#[derive(Debug, Clone, Default)]
pub struct SpeciesRegistry {
    species: SlotMap<SpeciesId, Species>,
}

impl SpeciesRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a species and returns the handle that refers to it from now on.
    pub fn insert(&mut self, species: Species) -> SpeciesId {
        self.species.insert(species)
    }

    /// Retrieves a species by handle.
    ///
    /// # Return
    ///
    /// Returns `Some(&Species)` if the species exists, otherwise `None`.
    pub fn get(&self, id: SpeciesId) -> Option<&Species> {
        self.species.get(id)
    }

    /// Retrieves a mutable reference to a species by handle.
    ///
    /// Changes are visible to every holder of the handle.
    pub fn get_mut(&mut self, id: SpeciesId) -> Option<&mut Species> {
        self.species.get_mut(id)
    }

    pub fn contains(&self, id: SpeciesId) -> bool {
        self.species.contains_key(id)
    }

    /// Label of a species, or `None` for an unknown handle.
    pub fn label(&self, id: SpeciesId) -> Option<&str> {
        self.species.get(id).map(|s| s.label.as_str())
    }

    /// Label of a species, falling back to the debug form of the handle.
    ///
    /// Intended for diagnostics, where a dangling handle should still produce a
    /// readable message.
    pub fn describe(&self, id: SpeciesId) -> String {
        self.label(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{:?}", id))
    }

    /// Finds the first species among `candidates` whose label is exactly `label`.
    pub fn find_by_label(&self, candidates: &[SpeciesId], label: &str) -> Option<SpeciesId> {
        candidates
            .iter()
            .copied()
            .find(|&id| self.label(id) == Some(label))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpeciesId, &Species)> {
        self.species.iter()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
