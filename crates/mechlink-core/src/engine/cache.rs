use crate::core::chemistry::{StructureMatcher, species_equivalent};
use crate::core::models::ids::SpeciesId;
use crate::core::models::registry::SpeciesRegistry;
use crate::engine::error::EngineError;
use std::collections::HashMap;

/// Memoizes species-level equivalence verdicts for one reconciliation.
///
/// Keys are unordered pairs, so `(a, b)` and `(b, a)` share one entry and the
/// collaborator is asked about each pair at most once.
pub(crate) struct EquivalenceCache<'a> {
    matcher: &'a dyn StructureMatcher,
    verdicts: HashMap<(SpeciesId, SpeciesId), bool>,
}

impl<'a> EquivalenceCache<'a> {
    pub fn new(matcher: &'a dyn StructureMatcher) -> Self {
        Self {
            matcher,
            verdicts: HashMap::new(),
        }
    }

    pub fn equivalent(
        &mut self,
        registry: &SpeciesRegistry,
        a: SpeciesId,
        b: SpeciesId,
    ) -> Result<bool, EngineError> {
        if a == b {
            return Ok(true);
        }
        let key = if a < b { (a, b) } else { (b, a) };
        if let Some(&verdict) = self.verdicts.get(&key) {
            return Ok(verdict);
        }

        let species_a = registry
            .get(a)
            .ok_or_else(|| EngineError::Internal(format!("unknown species handle {:?}", a)))?;
        let species_b = registry
            .get(b)
            .ok_or_else(|| EngineError::Internal(format!("unknown species handle {:?}", b)))?;

        let verdict = species_equivalent(self.matcher, species_a, species_b);
        self.verdicts.insert(key, verdict);
        Ok(verdict)
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }
}
