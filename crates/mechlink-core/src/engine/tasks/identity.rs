use crate::core::models::ids::SpeciesId;
use crate::core::models::registry::SpeciesRegistry;
use crate::engine::cache::EquivalenceCache;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::species_map::SpeciesMap;
use tracing::{info, instrument, trace, warn};

/// Result of identity resolution.
pub(crate) struct Resolution {
    pub map: SpeciesMap,
    /// Specification species without a canonical counterpart, in declaration order.
    pub unmatched: Vec<SpeciesId>,
}

/// Maps each specification species to the first structurally equivalent canonical species.
///
/// The canonical list is scanned in order and the first match wins. Species with no
/// match are left out of the map; dereferencing them later is an error.
#[instrument(skip_all, name = "identity_resolution_task")]
pub(crate) fn run(
    registry: &SpeciesRegistry,
    initial_species: &[SpeciesId],
    canonical: &[SpeciesId],
    cache: &mut EquivalenceCache,
    reporter: &ProgressReporter,
) -> Result<Resolution, EngineError> {
    let mut map = SpeciesMap::new();
    let mut unmatched = Vec::new();

    reporter.report(Progress::TaskStart {
        total_steps: initial_species.len() as u64,
    });
    for &spec in initial_species {
        let mut found = None;
        for &candidate in canonical {
            if cache.equivalent(registry, spec, candidate)? {
                found = Some(candidate);
                break;
            }
        }

        match found {
            Some(candidate) => {
                trace!(
                    spec = %registry.describe(spec),
                    canonical = %registry.describe(candidate),
                    "Resolved species."
                );
                map.insert(spec, candidate);
            }
            None => {
                let message = format!(
                    "Species '{}' has no structurally equivalent species in the canonical network.",
                    registry.describe(spec)
                );
                warn!("{}", message);
                reporter.report(Progress::Message(message));
                unmatched.push(spec);
            }
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    info!(
        resolved = map.len(),
        unmatched = unmatched.len(),
        "Identity resolution complete."
    );
    Ok(Resolution { map, unmatched })
}
