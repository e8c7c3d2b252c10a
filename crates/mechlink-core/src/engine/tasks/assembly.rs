use crate::core::chemistry::StructureRenderer;
use crate::core::io::traits::LoadedNetwork;
use crate::core::models::ids::SpeciesId;
use crate::core::models::job::Job;
use crate::core::models::registry::SpeciesRegistry;
use crate::core::utils::identifiers::path_safe_label;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{ImageReport, RenderFailure};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Replaces the job's core species and reactions with the canonical network.
///
/// Fails without touching the job if a reaction refers to a species that is not part
/// of the canonical species list.
#[instrument(skip_all, name = "assembly_task")]
pub(crate) fn run(job: &mut Job, network: LoadedNetwork) -> Result<(), EngineError> {
    let members: HashSet<SpeciesId> = network.species.iter().copied().collect();
    if let Some(reaction) = network
        .reactions
        .iter()
        .find(|r| r.species().any(|id| !members.contains(&id)))
    {
        return Err(EngineError::ReactionOutsideNetwork {
            reaction: reaction.equation(&job.registry),
        });
    }

    info!(
        species = network.species.len(),
        reactions = network.reactions.len(),
        "Installing canonical network as the core reaction model."
    );
    job.reaction_model.core.species = network.species;
    job.reaction_model.core.reactions = network.reactions;
    Ok(())
}

/// Creates `directory` unless it already exists as a directory.
pub(crate) fn ensure_directory(directory: &Path) -> Result<(), EngineError> {
    match std::fs::create_dir(directory) {
        Ok(()) => {
            debug!(path = %directory.display(), "Created image directory.");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && directory.is_dir() => Ok(()),
        Err(e) => Err(EngineError::ImageDirectory {
            path: directory.to_string_lossy().to_string(),
            source: e,
        }),
    }
}

/// Path of the image for a species labelled `label`.
pub(crate) fn image_path(directory: &Path, label: &str, extension: &str) -> PathBuf {
    directory.join(format!("{}.{}", path_safe_label(label), extension))
}

/// Renders the primary structure of every species lacking an image.
///
/// Existing images are never re-rendered. Individual render failures are logged and
/// recorded; only failing to create the directory aborts.
#[instrument(skip_all, name = "image_rendering_task", fields(directory = %directory.display()))]
pub(crate) fn render_images(
    registry: &SpeciesRegistry,
    species: &[SpeciesId],
    directory: &Path,
    extension: &str,
    renderer: &dyn StructureRenderer,
    reporter: &ProgressReporter,
) -> Result<ImageReport, EngineError> {
    ensure_directory(directory)?;

    let mut report = ImageReport {
        directory: Some(directory.to_path_buf()),
        ..Default::default()
    };

    reporter.report(Progress::TaskStart {
        total_steps: species.len() as u64,
    });
    for &id in species {
        let Some(entry) = registry.get(id) else {
            return Err(EngineError::Internal(format!(
                "canonical species {:?} is not registered",
                id
            )));
        };
        let path = image_path(directory, &entry.label, extension);

        if path.exists() {
            report.skipped.push(path);
        } else {
            let outcome = match entry.primary_structure() {
                Some(structure) => renderer.render(structure, &path).map_err(|e| e.to_string()),
                None => Err("species has no structure".to_string()),
            };
            match outcome {
                Ok(()) => report.rendered.push(path),
                Err(reason) => {
                    let message =
                        format!("Could not render image for species '{}': {}", entry.label, reason);
                    warn!("{}", message);
                    reporter.report(Progress::Message(message));
                    report.failures.push(RenderFailure {
                        label: entry.label.clone(),
                        path,
                        reason,
                    });
                }
            }
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    info!(
        rendered = report.rendered.len(),
        skipped = report.skipped.len(),
        failed = report.failures.len(),
        "Species images processed."
    );
    Ok(report)
}
