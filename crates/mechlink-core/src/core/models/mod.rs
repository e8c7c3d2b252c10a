//! # Core Models Module
//!
//! Data structures describing a simulation job and the canonical network it is
//! reconciled against.
//!
//! ## Ownership
//!
//! Every species, whether it came from the job specification or from the canonical
//! network, is stored exactly once in a [`registry::SpeciesRegistry`]. All other
//! structures (reactor quantity maps, termination criteria, reactions, the reaction
//! model) refer to species through [`ids::SpeciesId`] handles, so remapping a reference
//! is a matter of swapping one handle for another.
//!
//! ## Key Components
//!
//! - [`species`] - Species and their molecular structures
//! - [`registry`] - Arena owning all species of a job
//! - [`reaction`] - Reactions and their cached flux pairs
//! - [`reactor`] - Reactor variants, termination criteria and sensitivity targets
//! - [`job`] - The job root and its reaction model container
//! - [`ids`] - Surrogate identifiers
//!
//! ## Usage
//!
//! ```ignore
//! use mechlink::core::models::job::Job;
//! use mechlink::core::models::species::{Species, Structure};
//!
//! let mut job = Job::new("runs/methane/input.py");
//! let ch4 = job.add_initial_species(Species::new("CH4", vec![Structure::smiles("C")]));
//! ```

pub mod ids;
pub mod job;
pub mod reaction;
pub mod reactor;
pub mod registry;
pub mod species;
