//! Deterministic stand-ins for the chemistry collaborators, shared by unit tests.

use crate::core::chemistry::{PairGenerator, RenderError, StructureMatcher, StructureRenderer};
use crate::core::io::traits::{LoadedNetwork, NetworkLoadError, NetworkLoader, NetworkRequest};
use crate::core::models::reaction::{FluxPair, Reaction};
use crate::core::models::registry::SpeciesRegistry;
use crate::core::models::species::{Species, Structure};
use std::cell::{Cell, RefCell};
use std::path::Path;

/// Treats two structures as isomorphic when their notations are identical.
pub struct NotationMatcher;

impl StructureMatcher for NotationMatcher {
    fn is_isomorphic(&self, a: &Structure, b: &Structure) -> bool {
        a.format == b.format && a.notation == b.notation
    }
}

/// [`NotationMatcher`] that counts how often it is consulted.
#[derive(Default)]
pub struct CountingMatcher {
    calls: Cell<usize>,
}

impl CountingMatcher {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl StructureMatcher for CountingMatcher {
    fn is_isomorphic(&self, a: &Structure, b: &Structure) -> bool {
        self.calls.set(self.calls.get() + 1);
        NotationMatcher.is_isomorphic(a, b)
    }
}

/// Pairs reactants with products by position.
///
/// A lone reactant pairs with every product and every reactant pairs with a lone
/// product; otherwise the sides are zipped.
#[derive(Default)]
pub struct PositionalPairGenerator {
    calls: Cell<usize>,
}

impl PositionalPairGenerator {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl PairGenerator for PositionalPairGenerator {
    fn generate_pairs(&self, reaction: &Reaction, _registry: &SpeciesRegistry) -> Vec<FluxPair> {
        self.calls.set(self.calls.get() + 1);
        let (reactants, products) = (&reaction.reactants, &reaction.products);
        match (reactants.as_slice(), products.as_slice()) {
            ([], _) | (_, []) => Vec::new(),
            ([r], _) => products.iter().map(|&p| (*r, p)).collect(),
            (_, [p]) => reactants.iter().map(|&r| (r, *p)).collect(),
            _ => reactants.iter().copied().zip(products.iter().copied()).collect(),
        }
    }
}

/// Writes the structure notation to the output path instead of drawing it.
#[derive(Default)]
pub struct FileRenderer {
    calls: Cell<usize>,
}

impl FileRenderer {
    /// Notation this renderer refuses to draw.
    pub const UNDRAWABLE: &'static str = "<undrawable>";

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl StructureRenderer for FileRenderer {
    fn render(&self, structure: &Structure, output_path: &Path) -> Result<(), RenderError> {
        self.calls.set(self.calls.get() + 1);
        if structure.notation == Self::UNDRAWABLE {
            return Err(RenderError::Unsupported(structure.notation.clone()));
        }
        std::fs::write(output_path, &structure.notation).map_err(|e| RenderError::Io {
            path: output_path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

/// A species of a [`StaticLoader`] network.
#[derive(Clone)]
pub struct NetworkSpecies {
    label: String,
    smiles: String,
    reactive: bool,
}

impl NetworkSpecies {
    pub fn new(label: &str, smiles: &str) -> Self {
        Self {
            label: label.to_string(),
            smiles: smiles.to_string(),
            reactive: true,
        }
    }

    pub fn unreactive(mut self) -> Self {
        self.reactive = false;
        self
    }
}

enum Source {
    Described {
        species: Vec<NetworkSpecies>,
        reactions: Vec<(Vec<usize>, Vec<usize>)>,
    },
    Preloaded(LoadedNetwork),
}

/// Loader serving a fixed network and remembering the last request it saw.
pub struct StaticLoader {
    source: Source,
    last_request: RefCell<Option<NetworkRequest>>,
}

impl StaticLoader {
    /// Reactions are given as reactant and product indices into `species`.
    pub fn new(species: Vec<NetworkSpecies>, reactions: Vec<(Vec<usize>, Vec<usize>)>) -> Self {
        Self {
            source: Source::Described { species, reactions },
            last_request: RefCell::new(None),
        }
    }

    /// Serves a network whose species are already registered.
    pub fn preloaded(network: LoadedNetwork) -> Self {
        Self {
            source: Source::Preloaded(network),
            last_request: RefCell::new(None),
        }
    }

    pub fn last_request(&self) -> Option<NetworkRequest> {
        self.last_request.borrow().clone()
    }
}

impl NetworkLoader for StaticLoader {
    fn load(
        &self,
        request: &NetworkRequest,
        registry: &mut SpeciesRegistry,
    ) -> Result<LoadedNetwork, NetworkLoadError> {
        *self.last_request.borrow_mut() = Some(request.clone());
        match &self.source {
            Source::Preloaded(network) => Ok(network.clone()),
            Source::Described { species, reactions } => {
                let ids: Vec<_> = species
                    .iter()
                    .map(|s| {
                        registry.insert(
                            Species::new(s.label.clone(), vec![Structure::smiles(s.smiles.clone())])
                                .with_reactive(s.reactive),
                        )
                    })
                    .collect();
                let reactions = reactions
                    .iter()
                    .map(|(r, p)| {
                        Reaction::new(
                            r.iter().map(|&i| ids[i]).collect(),
                            p.iter().map(|&i| ids[i]).collect(),
                        )
                    })
                    .collect();
                Ok(LoadedNetwork {
                    species: ids,
                    reactions,
                })
            }
        }
    }
}

/// Loader whose network file never exists.
pub struct FailingLoader;

impl NetworkLoader for FailingLoader {
    fn load(
        &self,
        request: &NetworkRequest,
        _registry: &mut SpeciesRegistry,
    ) -> Result<LoadedNetwork, NetworkLoadError> {
        Err(NetworkLoadError::Io {
            path: request.network_path.to_string_lossy().to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }
}
