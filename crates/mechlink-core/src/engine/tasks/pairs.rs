use crate::core::chemistry::PairGenerator;
use crate::core::models::reaction::Reaction;
use crate::core::models::registry::SpeciesRegistry;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument};

/// Derives flux pairs for every reaction that has none cached.
///
/// Reactions with a non-empty pair set are left untouched. Whatever the generator
/// returns is cached, including an empty set.
///
/// Returns the number of reactions whose pairs were derived.
#[instrument(skip_all, name = "flux_pair_task")]
pub(crate) fn run(
    reactions: &mut [Reaction],
    registry: &SpeciesRegistry,
    generator: &dyn PairGenerator,
    reporter: &ProgressReporter,
) -> usize {
    let mut generated = 0;

    reporter.report(Progress::TaskStart {
        total_steps: reactions.len() as u64,
    });
    for reaction in reactions.iter_mut() {
        if !reaction.has_pairs() {
            let pairs = generator.generate_pairs(reaction, registry);
            if pairs.is_empty() {
                debug!(
                    reaction = %reaction.equation(registry),
                    "No flux pairs could be derived."
                );
            }
            reaction.pairs = Some(pairs);
            generated += 1;
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    info!("Derived flux pairs for {} reaction(s).", generated);
    generated
}
