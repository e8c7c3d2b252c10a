use crate::core::chemistry::{PairGenerator, StructureMatcher, StructureRenderer};
use crate::core::io::traits::{LoadedNetwork, NetworkLoader};
use crate::core::models::job::{InputDialect, Job};
use crate::core::models::registry::SpeciesRegistry;
use crate::core::models::species::Structure;
use crate::core::utils::identifiers::bath_gas_smiles;
use crate::engine::cache::EquivalenceCache;
use crate::engine::config::ReconcileConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter, Stage};
use crate::engine::state::ReconcileReport;
use crate::engine::tasks;
use tracing::{debug, info, instrument};

/// External collaborators a reconciliation relies on.
#[derive(Clone, Copy)]
pub struct Toolkit<'a> {
    pub loader: &'a dyn NetworkLoader,
    pub matcher: &'a dyn StructureMatcher,
    pub pair_generator: &'a dyn PairGenerator,
    /// Required only when image generation is enabled.
    pub renderer: Option<&'a dyn StructureRenderer>,
}

/// Reconciles `job` with its canonical network and returns it.
///
/// Convenience wrapper around [`run`] without progress reporting.
pub fn reconcile(
    mut job: Job,
    config: &ReconcileConfig,
    toolkit: &Toolkit,
) -> Result<Job, EngineError> {
    run(&mut job, config, toolkit, &ProgressReporter::new())?;
    Ok(job)
}

/// Loads the canonical network for `job` and links every reference in the job to it.
///
/// On success the job's core reaction model holds the canonical species (including
/// any synthesized observed species) and reactions, and every reactor refers only to
/// canonical species. On failure the job must be considered unusable.
#[instrument(skip_all, name = "reconcile_workflow", fields(job = %job.input_path.display()))]
pub fn run(
    job: &mut Job,
    config: &ReconcileConfig,
    toolkit: &Toolkit,
    reporter: &ProgressReporter,
) -> Result<ReconcileReport, EngineError> {
    let renderer = match (config.generate_images, toolkit.renderer) {
        (true, None) => return Err(EngineError::MissingRenderer),
        (true, Some(renderer)) => Some(renderer),
        (false, _) => None,
    };
    let mut report = ReconcileReport::default();

    // === Stage 0: Load the canonical network ===
    let mut network = run_stage(reporter, Stage::LoadNetwork, || {
        load_network(job, config, toolkit.loader)
    })?;

    let mut cache = EquivalenceCache::new(toolkit.matcher);

    // === Stage 1: Observed species for sampled reactors ===
    let added = run_stage(reporter, Stage::SynthesizeObserved, || {
        tasks::observed::run(
            &job.reactors,
            &mut job.registry,
            &mut network.species,
            &mut cache,
            &config.observed_suffix,
            reporter,
        )
    })?;
    report.synthesized = added
        .iter()
        .map(|&id| job.registry.describe(id))
        .collect();

    // === Stage 2: Identity resolution ===
    let resolution = run_stage(reporter, Stage::ResolveIdentity, || {
        tasks::identity::run(
            &job.registry,
            &job.initial_species,
            &network.species,
            &mut cache,
            reporter,
        )
    })?;
    report.unmatched = resolution
        .unmatched
        .iter()
        .map(|&id| job.registry.describe(id))
        .collect();
    debug!(comparisons = cache.len(), "Structural comparisons performed.");

    // === Stage 3: Flux pairs ===
    report.pairs_generated = run_stage(reporter, Stage::CompletePairs, || {
        Ok(tasks::pairs::run(
            &mut network.reactions,
            &job.registry,
            toolkit.pair_generator,
            reporter,
        ))
    })?;

    // === Stage 4: Reactor remapping ===
    run_stage(reporter, Stage::RemapReactors, || {
        tasks::remap::run(
            &mut job.reactors,
            &resolution.map,
            &job.registry,
            &job.initial_species,
            job.dialect,
            reporter,
        )
    })?;

    // === Stage 5: Assembly ===
    run_stage(reporter, Stage::Assemble, || tasks::assembly::run(job, network))?;

    if let Some(renderer) = renderer {
        let directory = config.image_directory_for(job);
        report.images = run_stage(reporter, Stage::RenderImages, || {
            tasks::assembly::render_images(
                &job.registry,
                &job.reaction_model.core.species,
                &directory,
                &config.image_extension,
                renderer,
                reporter,
            )
        })?;
    }

    info!(
        species = job.reaction_model.core.species.len(),
        reactions = job.reaction_model.core.reactions.len(),
        synthesized = report.synthesized.len(),
        unmatched = report.unmatched.len(),
        "Reconciliation complete."
    );
    Ok(report)
}

fn run_stage<T>(
    reporter: &ProgressReporter,
    stage: Stage,
    body: impl FnOnce() -> Result<T, EngineError>,
) -> Result<T, EngineError> {
    reporter.report(Progress::StageStart { stage });
    info!("{}...", stage);
    let result = body()?;
    reporter.report(Progress::StageFinish { stage });
    Ok(result)
}

fn load_network(
    job: &mut Job,
    config: &ReconcileConfig,
    loader: &dyn NetworkLoader,
) -> Result<LoadedNetwork, EngineError> {
    let request = config.network_request(job);
    info!(
        network = %request.network_path.display(),
        dictionary = %request.dictionary_path.display(),
        "Loading canonical network."
    );
    let network = loader.load(&request, &mut job.registry)?;

    let working_directory = job.working_directory().to_path_buf();
    let output_directory = std::path::absolute(&working_directory).unwrap_or(working_directory);
    debug!(path = %output_directory.display(), "Output directory set.");
    job.output_directory = Some(output_directory);

    if job.dialect == InputDialect::Legacy {
        substitute_bath_gases(&mut job.registry, &network);
    }
    Ok(network)
}

/// Gives bath gases their canonical structure, which legacy dictionaries omit.
fn substitute_bath_gases(registry: &mut SpeciesRegistry, network: &LoadedNetwork) {
    for &id in &network.species {
        if let Some(species) = registry.get_mut(id) {
            if let Some(smiles) = bath_gas_smiles(&species.label) {
                debug!(label = %species.label, smiles, "Assigning bath-gas structure.");
                species.structures = vec![Structure::smiles(smiles)];
            }
        }
    }
}
