use super::ids::SpeciesId;
use super::reaction::Reaction;
use super::reactor::Reactor;
use super::registry::SpeciesRegistry;
use super::species::Species;
use std::fmt;
use std::path::{Path, PathBuf};

/// Input language the job specification was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputDialect {
    /// Current job input format.
    #[default]
    Native,
    /// Older job input format. Only gas-phase reactors are supported, and the
    /// accompanying species dictionaries omit bath gases.
    Legacy,
}

impl fmt::Display for InputDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputDialect::Native => f.write_str("native"),
            InputDialect::Legacy => f.write_str("legacy"),
        }
    }
}

/// Core of the reaction model: the species and reactions the integrator will use.
#[derive(Debug, Clone, Default)]
pub struct CoreModel {
    pub species: Vec<SpeciesId>,
    pub reactions: Vec<Reaction>,
}

/// Container for the job's reaction model.
#[derive(Debug, Clone, Default)]
pub struct ReactionModel {
    pub core: CoreModel,
}

/// A simulation job: the root of everything a reconciliation reads and writes.
#[derive(Debug, Clone)]
pub struct Job {
    /// Path of the job input file; its directory is the job's working directory.
    pub input_path: PathBuf,
    pub dialect: InputDialect,
    /// Owner of every species, specification-side and canonical.
    pub registry: SpeciesRegistry,
    /// Species declared by the job specification, in declaration order.
    pub initial_species: Vec<SpeciesId>,
    pub reactors: Vec<Reactor>,
    pub reaction_model: ReactionModel,
    /// Absolute working directory, filled in once the canonical network is loaded.
    pub output_directory: Option<PathBuf>,
}

impl Job {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            dialect: InputDialect::default(),
            registry: SpeciesRegistry::new(),
            initial_species: Vec::new(),
            reactors: Vec::new(),
            reaction_model: ReactionModel::default(),
            output_directory: None,
        }
    }

    pub fn with_dialect(mut self, dialect: InputDialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Registers a specification-side species and appends it to the initial species list.
    pub fn add_initial_species(&mut self, species: Species) -> SpeciesId {
        let id = self.registry.insert(species);
        self.initial_species.push(id);
        id
    }

    /// Appends a reactor and returns its index.
    pub fn add_reactor(&mut self, reactor: impl Into<Reactor>) -> usize {
        self.reactors.push(reactor.into());
        self.reactors.len() - 1
    }

    /// Directory containing the job input file.
    pub fn working_directory(&self) -> &Path {
        match self.input_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}
