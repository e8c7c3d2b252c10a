use crate::core::models::ids::SpeciesId;
use crate::core::models::reactor::Reactor;
use crate::core::models::registry::SpeciesRegistry;
use crate::engine::cache::EquivalenceCache;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::collections::HashSet;
use tracing::{debug, info, instrument, trace};

/// Adds an observed copy of every trackable species for each sampled reactor.
///
/// A canonical species is trackable when it is reactive, not flagged constant, does
/// not already carry `suffix`, and is not structurally equivalent to any of the
/// reactor's constant species. Copies are appended to `canonical` after each
/// reactor has been scanned. A label already present in `canonical`, or staged
/// earlier in the same run, is never added twice.
///
/// Returns the handles of the species that were added, in insertion order.
#[instrument(skip_all, name = "observed_species_task")]
pub(crate) fn run(
    reactors: &[Reactor],
    registry: &mut SpeciesRegistry,
    canonical: &mut Vec<SpeciesId>,
    cache: &mut EquivalenceCache,
    suffix: &str,
    reporter: &ProgressReporter,
) -> Result<Vec<SpeciesId>, EngineError> {
    let sampled: Vec<(usize, &[SpeciesId])> = reactors
        .iter()
        .enumerate()
        .filter_map(|(index, reactor)| match reactor {
            Reactor::Sampled(r) => Some((index, r.constant_species.as_slice())),
            _ => None,
        })
        .collect();

    if sampled.is_empty() {
        debug!("No sampled reactors; skipping observed-species synthesis.");
        return Ok(Vec::new());
    }

    let mut known_labels: HashSet<String> = canonical
        .iter()
        .filter_map(|&id| registry.label(id).map(str::to_string))
        .collect();
    let mut added = Vec::new();

    reporter.report(Progress::TaskStart {
        total_steps: sampled.len() as u64,
    });
    for (reactor_index, constants) in sampled {
        let mut staged = Vec::new();

        for &candidate in canonical.iter() {
            let species = registry.get(candidate).ok_or_else(|| {
                EngineError::Internal(format!("canonical species {:?} is not registered", candidate))
            })?;
            if !species.reactive || species.constant || species.is_observed(suffix) {
                continue;
            }

            let mut held_constant = false;
            for &constant in constants {
                if cache.equivalent(registry, candidate, constant)? {
                    held_constant = true;
                    break;
                }
            }
            if held_constant {
                trace!(label = %species.label, "Species is held constant; not observed.");
                continue;
            }

            let observed_label = species.observed_label(suffix);
            if known_labels.contains(&observed_label) {
                trace!(label = %observed_label, "Observed species already present.");
                continue;
            }

            let mut observed = species.clone();
            observed.label = observed_label.clone();
            known_labels.insert(observed_label);
            staged.push(observed);
        }

        debug!(
            reactor = reactor_index,
            count = staged.len(),
            "Appending observed species."
        );
        for observed in staged {
            let id = registry.insert(observed);
            canonical.push(id);
            added.push(id);
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    info!("Synthesized {} observed species.", added.len());
    Ok(added)
}
