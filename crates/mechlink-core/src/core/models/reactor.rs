use super::ids::SpeciesId;
use std::collections::HashMap;
use std::fmt;

/// Species-to-quantity map (mole fraction, concentration or surface coverage).
pub type SpeciesQuantities = HashMap<SpeciesId, f64>;

/// Condition under which a simulation stops.
#[derive(Debug, Clone, PartialEq)]
pub enum TerminationCriterion {
    /// Stop once `species` reaches the given fractional conversion.
    Conversion { species: SpeciesId, conversion: f64 },
    /// Stop after a fixed reaction time, in seconds.
    Time { seconds: f64 },
    /// Stop once the characteristic rate falls below `ratio` of its initial value.
    RateRatio { ratio: f64 },
}

impl TerminationCriterion {
    /// The species this criterion refers to, if any.
    pub fn species(&self) -> Option<SpeciesId> {
        match self {
            TerminationCriterion::Conversion { species, .. } => Some(*species),
            TerminationCriterion::Time { .. } | TerminationCriterion::RateRatio { .. } => None,
        }
    }
}

/// Species whose sensitivity coefficients are reported.
#[derive(Debug, Clone, PartialEq)]
pub enum SensitivityTargets {
    /// Every species in the model.
    All,
    /// An explicit list, possibly empty.
    Species(Vec<SpeciesId>),
}

impl Default for SensitivityTargets {
    fn default() -> Self {
        SensitivityTargets::Species(Vec::new())
    }
}

/// Settings shared by every reactor variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReactorSettings {
    pub termination: Vec<TerminationCriterion>,
    pub sensitive_species: SensitivityTargets,
}

/// Ideal-gas batch reactor initialized by mole fractions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GasReactor {
    pub initial_mole_fractions: SpeciesQuantities,
    pub settings: ReactorSettings,
}

/// Liquid-phase reactor initialized by concentrations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiquidReactor {
    pub initial_concentrations: SpeciesQuantities,
    /// Labels of species held at constant concentration, as written in the job.
    pub constant_species_labels: Option<Vec<String>>,
    pub settings: ReactorSettings,
}

/// Heterogeneous reactor with a gas phase and a catalytic surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurfaceReactor {
    pub initial_gas_mole_fractions: SpeciesQuantities,
    pub initial_surface_coverages: SpeciesQuantities,
    pub settings: ReactorSettings,
}

/// Molecular-beam sampled reactor.
///
/// Sampled reactors track an "observed" copy of every reactive species that is not
/// held constant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampledReactor {
    pub initial_mole_fractions: SpeciesQuantities,
    pub constant_species: Vec<SpeciesId>,
    pub settings: ReactorSettings,
}

/// Discriminant of [`Reactor`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactorKind {
    Gas,
    Liquid,
    Surface,
    Sampled,
}

impl fmt::Display for ReactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReactorKind::Gas => "gas-phase",
            ReactorKind::Liquid => "liquid",
            ReactorKind::Surface => "surface",
            ReactorKind::Sampled => "sampled",
        };
        f.write_str(name)
    }
}

/// A reaction system declared by the job, one case per reactor kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Reactor {
    Gas(GasReactor),
    Liquid(LiquidReactor),
    Surface(SurfaceReactor),
    Sampled(SampledReactor),
}

impl Reactor {
    pub fn kind(&self) -> ReactorKind {
        match self {
            Reactor::Gas(_) => ReactorKind::Gas,
            Reactor::Liquid(_) => ReactorKind::Liquid,
            Reactor::Surface(_) => ReactorKind::Surface,
            Reactor::Sampled(_) => ReactorKind::Sampled,
        }
    }

    pub fn settings(&self) -> &ReactorSettings {
        match self {
            Reactor::Gas(r) => &r.settings,
            Reactor::Liquid(r) => &r.settings,
            Reactor::Surface(r) => &r.settings,
            Reactor::Sampled(r) => &r.settings,
        }
    }

    pub fn settings_mut(&mut self) -> &mut ReactorSettings {
        match self {
            Reactor::Gas(r) => &mut r.settings,
            Reactor::Liquid(r) => &mut r.settings,
            Reactor::Surface(r) => &mut r.settings,
            Reactor::Sampled(r) => &mut r.settings,
        }
    }

    /// Every species handle held by the reactor's configuration.
    ///
    /// Constant-species labels of liquid reactors are strings, not handles, and are
    /// therefore not included.
    pub fn species_references(&self) -> Vec<SpeciesId> {
        let mut refs: Vec<SpeciesId> = match self {
            Reactor::Gas(r) => r.initial_mole_fractions.keys().copied().collect(),
            Reactor::Liquid(r) => r.initial_concentrations.keys().copied().collect(),
            Reactor::Surface(r) => r
                .initial_gas_mole_fractions
                .keys()
                .chain(r.initial_surface_coverages.keys())
                .copied()
                .collect(),
            Reactor::Sampled(r) => r
                .initial_mole_fractions
                .keys()
                .chain(r.constant_species.iter())
                .copied()
                .collect(),
        };

        let settings = self.settings();
        refs.extend(settings.termination.iter().filter_map(|t| t.species()));
        if let SensitivityTargets::Species(list) = &settings.sensitive_species {
            refs.extend(list.iter().copied());
        }
        refs
    }
}

impl From<GasReactor> for Reactor {
    fn from(r: GasReactor) -> Self {
        Reactor::Gas(r)
    }
}

impl From<LiquidReactor> for Reactor {
    fn from(r: LiquidReactor) -> Self {
        Reactor::Liquid(r)
    }
}

impl From<SurfaceReactor> for Reactor {
    fn from(r: SurfaceReactor) -> Self {
        Reactor::Surface(r)
    }
}

impl From<SampledReactor> for Reactor {
    fn from(r: SampledReactor) -> Self {
        Reactor::Sampled(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<SpeciesId> {
        let mut map: SlotMap<SpeciesId, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn only_conversion_criteria_carry_species() {
        let ids = ids(1);
        let conversion = TerminationCriterion::Conversion {
            species: ids[0],
            conversion: 0.9,
        };

        assert_eq!(conversion.species(), Some(ids[0]));
        assert_eq!(TerminationCriterion::Time { seconds: 1.0 }.species(), None);
        assert_eq!(TerminationCriterion::RateRatio { ratio: 0.01 }.species(), None);
    }

    #[test]
    fn default_sensitivity_is_an_empty_list() {
        assert_eq!(
            SensitivityTargets::default(),
            SensitivityTargets::Species(Vec::new())
        );
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Reactor::from(GasReactor::default()).kind(), ReactorKind::Gas);
        assert_eq!(
            Reactor::from(LiquidReactor::default()).kind(),
            ReactorKind::Liquid
        );
        assert_eq!(
            Reactor::from(SurfaceReactor::default()).kind(),
            ReactorKind::Surface
        );
        assert_eq!(
            Reactor::from(SampledReactor::default()).kind(),
            ReactorKind::Sampled
        );
        assert_eq!(ReactorKind::Gas.to_string(), "gas-phase");
    }

    #[test]
    fn species_references_cover_all_handle_fields() {
        let ids = ids(6);
        let reactor = Reactor::from(SurfaceReactor {
            initial_gas_mole_fractions: HashMap::from([(ids[0], 0.5), (ids[1], 0.5)]),
            initial_surface_coverages: HashMap::from([(ids[2], 1.0)]),
            settings: ReactorSettings {
                termination: vec![
                    TerminationCriterion::Conversion {
                        species: ids[3],
                        conversion: 0.5,
                    },
                    TerminationCriterion::Time { seconds: 10.0 },
                ],
                sensitive_species: SensitivityTargets::Species(vec![ids[4]]),
            },
        });

        let mut refs = reactor.species_references();
        refs.sort();
        let mut expected = ids[..5].to_vec();
        expected.sort();
        assert_eq!(refs, expected);
    }

    #[test]
    fn species_references_include_sampled_constants_but_not_all_sentinel() {
        let ids = ids(3);
        let reactor = Reactor::from(SampledReactor {
            initial_mole_fractions: HashMap::from([(ids[0], 1.0)]),
            constant_species: vec![ids[1]],
            settings: ReactorSettings {
                termination: Vec::new(),
                sensitive_species: SensitivityTargets::All,
            },
        });

        let refs = reactor.species_references();
        assert_eq!(refs.len(), 2);
        assert!(refs.contains(&ids[0]));
        assert!(refs.contains(&ids[1]));
        assert!(!refs.contains(&ids[2]));
    }

    #[test]
    fn settings_mut_edits_the_variant_settings() {
        let mut reactor = Reactor::from(LiquidReactor::default());
        reactor.settings_mut().sensitive_species = SensitivityTargets::All;

        assert_eq!(reactor.settings().sensitive_species, SensitivityTargets::All);
    }
}
