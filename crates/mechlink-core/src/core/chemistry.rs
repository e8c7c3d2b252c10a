//! Interfaces to the chemistry toolkit the engine depends on but does not implement:
//! graph isomorphism, flux-pair derivation and structure rendering.

use crate::core::models::reaction::{FluxPair, Reaction};
use crate::core::models::registry::SpeciesRegistry;
use crate::core::models::species::{Species, Structure};
use std::path::Path;
use thiserror::Error;

/// Answers whether two molecular structures describe the same molecule.
pub trait StructureMatcher {
    fn is_isomorphic(&self, a: &Structure, b: &Structure) -> bool;
}

/// Derives reactant-to-product flux pairs for a reaction.
///
/// Derivation never fails; a reaction without a sensible pairing yields an empty set.
pub trait PairGenerator {
    fn generate_pairs(&self, reaction: &Reaction, registry: &SpeciesRegistry) -> Vec<FluxPair>;
}

/// Draws a molecular structure to an image file.
pub trait StructureRenderer {
    fn render(&self, structure: &Structure, output_path: &Path) -> Result<(), RenderError>;
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error while writing '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Structure cannot be drawn: {0}")]
    Unsupported(String),
}

/// Returns `true` if any structure of `a` is isomorphic to any structure of `b`.
pub fn species_equivalent(matcher: &dyn StructureMatcher, a: &Species, b: &Species) -> bool {
    a.structures
        .iter()
        .any(|sa| b.structures.iter().any(|sb| matcher.is_isomorphic(sa, sb)))
}
