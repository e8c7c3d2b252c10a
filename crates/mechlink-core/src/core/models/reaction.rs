use super::ids::SpeciesId;
use super::registry::SpeciesRegistry;

/// A reactant-to-product correspondence used to draw flux diagrams.
pub type FluxPair = (SpeciesId, SpeciesId);

/// A reaction of the canonical network.
///
/// Flux pairs are derived lazily by a [`PairGenerator`](crate::core::chemistry::PairGenerator)
/// and cached in `pairs`. `None` means "never derived"; `Some(vec![])` means the
/// derivation ran but found nothing sensible.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reaction {
    pub reactants: Vec<SpeciesId>,
    pub products: Vec<SpeciesId>,
    /// Marks reactions declared as intentional duplicates by the network.
    pub duplicate: bool,
    pub pairs: Option<Vec<FluxPair>>,
}

impl Reaction {
    pub fn new(reactants: Vec<SpeciesId>, products: Vec<SpeciesId>) -> Self {
        Self {
            reactants,
            products,
            duplicate: false,
            pairs: None,
        }
    }

    pub fn with_pairs(mut self, pairs: Vec<FluxPair>) -> Self {
        self.pairs = Some(pairs);
        self
    }

    /// Returns `true` if a non-empty pair set is cached.
    pub fn has_pairs(&self) -> bool {
        self.pairs.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Iterates reactants followed by products.
    pub fn species(&self) -> impl Iterator<Item = SpeciesId> + '_ {
        self.reactants.iter().chain(self.products.iter()).copied()
    }

    /// Human-readable equation such as `CH4 + OH <=> CH3 + H2O`.
    pub fn equation(&self, registry: &SpeciesRegistry) -> String {
        let side = |ids: &[SpeciesId]| {
            ids.iter()
                .map(|&id| registry.describe(id))
                .collect::<Vec<_>>()
                .join(" + ")
        };
        format!("{} <=> {}", side(&self.reactants), side(&self.products))
    }
}
