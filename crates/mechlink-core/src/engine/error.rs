use std::fmt;
use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::traits::NetworkLoadError;
use crate::core::models::job::InputDialect;
use crate::core::models::reactor::ReactorKind;

/// Reactor field in which a species reference was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceSite {
    InitialMoleFraction,
    InitialConcentration,
    GasMoleFraction,
    SurfaceCoverage,
    ConstantSpecies,
    TerminationConversion,
    SensitiveSpecies,
}

impl fmt::Display for ReferenceSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceSite::InitialMoleFraction => "initial mole fractions",
            ReferenceSite::InitialConcentration => "initial concentrations",
            ReferenceSite::GasMoleFraction => "initial gas mole fractions",
            ReferenceSite::SurfaceCoverage => "initial surface coverages",
            ReferenceSite::ConstantSpecies => "constant species",
            ReferenceSite::TerminationConversion => "conversion termination criterion",
            ReferenceSite::SensitiveSpecies => "sensitive species",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load canonical network: {0}")]
    NetworkLoad(#[from] NetworkLoadError),

    #[error(
        "Species '{label}' used in the {site} of reactor {reactor} has no structurally equivalent species in the canonical network"
    )]
    UnresolvedSpecies {
        label: String,
        reactor: usize,
        site: ReferenceSite,
    },

    #[error("Constant species '{label}' of reactor {reactor} is not declared among the initial species")]
    UnknownConstantSpecies { label: String, reactor: usize },

    #[error(
        "Species '{first}' and '{second}' in the {site} of reactor {reactor} both resolve to canonical species '{target}'"
    )]
    ConflictingReference {
        first: String,
        second: String,
        target: String,
        reactor: usize,
        site: ReferenceSite,
    },

    #[error("Reactor {reactor} is a {kind} reactor, which {dialect} job inputs do not support")]
    UnsupportedReactor {
        reactor: usize,
        kind: ReactorKind,
        dialect: InputDialect,
    },

    #[error("Reaction '{reaction}' references species outside the canonical network")]
    ReactionOutsideNetwork { reaction: String },

    #[error("Image generation was requested but no structure renderer was provided")]
    MissingRenderer,

    #[error("Failed to create image directory '{path}': {source}")]
    ImageDirectory {
        path: String,
        source: std::io::Error,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
