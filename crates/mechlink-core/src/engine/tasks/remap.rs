use crate::core::models::ids::SpeciesId;
use crate::core::models::job::InputDialect;
use crate::core::models::reactor::{
    GasReactor, LiquidReactor, Reactor, ReactorSettings, SampledReactor, SensitivityTargets,
    SpeciesQuantities, SurfaceReactor, TerminationCriterion,
};
use crate::core::models::registry::SpeciesRegistry;
use crate::engine::error::{EngineError, ReferenceSite};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::species_map::SpeciesMap;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument};

/// Everything needed to translate a reactor's specification-side references.
pub(crate) struct RemapContext<'a> {
    pub map: &'a SpeciesMap,
    pub registry: &'a SpeciesRegistry,
    pub initial_species: &'a [SpeciesId],
    /// Canonical species some specification species resolved to.
    pub resolved: &'a HashSet<SpeciesId>,
    pub dialect: InputDialect,
    pub reactor: usize,
}

impl RemapContext<'_> {
    fn resolve(&self, spec: SpeciesId, site: ReferenceSite) -> Result<SpeciesId, EngineError> {
        self.map
            .get(spec)
            .ok_or_else(|| EngineError::UnresolvedSpecies {
                label: self.registry.describe(spec),
                reactor: self.reactor,
                site,
            })
    }

    fn resolve_quantities(
        &self,
        quantities: &SpeciesQuantities,
        site: ReferenceSite,
    ) -> Result<SpeciesQuantities, EngineError> {
        let mut remapped = HashMap::with_capacity(quantities.len());
        let mut sources: HashMap<SpeciesId, SpeciesId> = HashMap::with_capacity(quantities.len());

        for (&spec, &value) in quantities {
            let target = self.resolve(spec, site)?;
            if let Some(previous) = sources.insert(target, spec) {
                return Err(EngineError::ConflictingReference {
                    first: self.registry.describe(previous),
                    second: self.registry.describe(spec),
                    target: self.registry.describe(target),
                    reactor: self.reactor,
                    site,
                });
            }
            remapped.insert(target, value);
        }
        Ok(remapped)
    }

    fn resolve_list(
        &self,
        species: &[SpeciesId],
        site: ReferenceSite,
    ) -> Result<Vec<SpeciesId>, EngineError> {
        species.iter().map(|&id| self.resolve(id, site)).collect()
    }
}

/// Rewrites every specification-side species reference held by a reactor
/// configuration so that it points at the canonical network.
pub(crate) trait RemapSpeciesReferences {
    fn remap_species_references(&mut self, ctx: &RemapContext) -> Result<(), EngineError>;
}

impl RemapSpeciesReferences for ReactorSettings {
    fn remap_species_references(&mut self, ctx: &RemapContext) -> Result<(), EngineError> {
        for criterion in &mut self.termination {
            if let TerminationCriterion::Conversion { species, .. } = criterion {
                // Legacy inputs may already name a resolved network species directly.
                if ctx.dialect == InputDialect::Legacy && ctx.resolved.contains(&*species) {
                    continue;
                }
                *species = ctx.resolve(*species, ReferenceSite::TerminationConversion)?;
            }
        }

        if let SensitivityTargets::Species(list) = &mut self.sensitive_species {
            *list = ctx.resolve_list(list, ReferenceSite::SensitiveSpecies)?;
        }
        Ok(())
    }
}

impl RemapSpeciesReferences for GasReactor {
    fn remap_species_references(&mut self, ctx: &RemapContext) -> Result<(), EngineError> {
        self.initial_mole_fractions = ctx.resolve_quantities(
            &self.initial_mole_fractions,
            ReferenceSite::InitialMoleFraction,
        )?;
        self.settings.remap_species_references(ctx)
    }
}

impl RemapSpeciesReferences for LiquidReactor {
    fn remap_species_references(&mut self, ctx: &RemapContext) -> Result<(), EngineError> {
        if let Some(labels) = &mut self.constant_species_labels {
            let mut canonical_labels = Vec::with_capacity(labels.len());
            for label in labels.iter() {
                let spec = ctx
                    .registry
                    .find_by_label(ctx.initial_species, label)
                    .ok_or_else(|| EngineError::UnknownConstantSpecies {
                        label: label.clone(),
                        reactor: ctx.reactor,
                    })?;
                let canonical = ctx.resolve(spec, ReferenceSite::ConstantSpecies)?;
                canonical_labels.push(ctx.registry.describe(canonical));
            }
            *labels = canonical_labels;
        }

        self.initial_concentrations = ctx.resolve_quantities(
            &self.initial_concentrations,
            ReferenceSite::InitialConcentration,
        )?;
        self.settings.remap_species_references(ctx)
    }
}

impl RemapSpeciesReferences for SurfaceReactor {
    fn remap_species_references(&mut self, ctx: &RemapContext) -> Result<(), EngineError> {
        self.initial_gas_mole_fractions = ctx.resolve_quantities(
            &self.initial_gas_mole_fractions,
            ReferenceSite::GasMoleFraction,
        )?;
        self.initial_surface_coverages = ctx.resolve_quantities(
            &self.initial_surface_coverages,
            ReferenceSite::SurfaceCoverage,
        )?;
        self.settings.remap_species_references(ctx)
    }
}

impl RemapSpeciesReferences for SampledReactor {
    fn remap_species_references(&mut self, ctx: &RemapContext) -> Result<(), EngineError> {
        self.initial_mole_fractions = ctx.resolve_quantities(
            &self.initial_mole_fractions,
            ReferenceSite::InitialMoleFraction,
        )?;
        self.constant_species =
            ctx.resolve_list(&self.constant_species, ReferenceSite::ConstantSpecies)?;
        self.settings.remap_species_references(ctx)
    }
}

impl RemapSpeciesReferences for Reactor {
    fn remap_species_references(&mut self, ctx: &RemapContext) -> Result<(), EngineError> {
        match self {
            Reactor::Gas(r) => r.remap_species_references(ctx),
            Reactor::Liquid(r) => r.remap_species_references(ctx),
            Reactor::Surface(r) => r.remap_species_references(ctx),
            Reactor::Sampled(r) => r.remap_species_references(ctx),
        }
    }
}

/// Remaps every reactor of a job.
///
/// Each reactor is remapped on a copy that replaces the original only once all of
/// its fields resolved; the first failure aborts the run.
#[instrument(skip_all, name = "reactor_remap_task")]
pub(crate) fn run(
    reactors: &mut [Reactor],
    map: &SpeciesMap,
    registry: &SpeciesRegistry,
    initial_species: &[SpeciesId],
    dialect: InputDialect,
    reporter: &ProgressReporter,
) -> Result<(), EngineError> {
    let resolved: HashSet<SpeciesId> = map.iter().map(|(_, target)| target).collect();

    reporter.report(Progress::TaskStart {
        total_steps: reactors.len() as u64,
    });
    for (index, reactor) in reactors.iter_mut().enumerate() {
        if dialect == InputDialect::Legacy && !matches!(reactor, Reactor::Gas(_)) {
            return Err(EngineError::UnsupportedReactor {
                reactor: index,
                kind: reactor.kind(),
                dialect,
            });
        }

        let ctx = RemapContext {
            map,
            registry,
            initial_species,
            resolved: &resolved,
            dialect,
            reactor: index,
        };
        let mut remapped = reactor.clone();
        remapped.remap_species_references(&ctx)?;
        *reactor = remapped;

        debug!(reactor = index, kind = %reactor.kind(), "Reactor remapped.");
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    info!("Remapped {} reactor(s).", reactors.len());
    Ok(())
}
