use crate::core::models::ids::SpeciesId;
use crate::core::models::reaction::Reaction;
use crate::core::models::registry::SpeciesRegistry;
use std::path::PathBuf;
use thiserror::Error;

/// Everything a loader needs to locate and interpret a canonical network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRequest {
    /// Path of the network (mechanism) file.
    pub network_path: PathBuf,
    /// Path of the species dictionary giving the structure of every network species.
    pub dictionary_path: PathBuf,
    /// Keep the labels used in the network file instead of dictionary labels.
    pub use_original_names: bool,
    /// Ask the loader to flag undeclared duplicate reactions.
    pub check_duplicates: bool,
}

/// A canonical network whose species have been registered.
#[derive(Debug, Clone, Default)]
pub struct LoadedNetwork {
    /// Canonical species, in network order.
    pub species: Vec<SpeciesId>,
    /// Canonical reactions, referring only to handles in `species`.
    pub reactions: Vec<Reaction>,
}

/// Defines the interface for loading a canonical reaction network.
pub trait NetworkLoader {
    /// Reads the network described by `request`.
    ///
    /// Every species of the network must be inserted into `registry`, and the returned
    /// lists must refer to the inserted handles.
    ///
    /// # Errors
    ///
    /// Returns an error if the files cannot be read or are malformed.
    fn load(
        &self,
        request: &NetworkRequest,
        registry: &mut SpeciesRegistry,
    ) -> Result<LoadedNetwork, NetworkLoadError>;
}

#[derive(Debug, Error)]
pub enum NetworkLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Parse error in '{path}' at line {line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },
    #[error("Duplicate reaction not marked as such: {0}")]
    UndeclaredDuplicate(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
