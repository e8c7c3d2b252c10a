//! # I/O Module
//!
//! Interface through which the canonical reaction network is obtained.
//!
//! The engine does not parse network files itself. A [`traits::NetworkLoader`]
//! implementation reads the network and dictionary files, registers the species it
//! finds in the job's [`SpeciesRegistry`](crate::core::models::registry::SpeciesRegistry)
//! and returns the canonical species and reaction lists.

pub mod traits;
