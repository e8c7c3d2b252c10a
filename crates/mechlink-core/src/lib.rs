//! # MechLink Core Library
//!
//! Links a human-authored kinetic simulation job to the canonical reaction network
//! generated for it, so that every species and reaction reference used by the job
//! resolves to the exact object present in the network.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Data models for species, reactions, reactors and jobs,
//!   the traits through which external chemistry collaborators (network loaders,
//!   isomorphism checkers, pair generators, structure renderers) are plugged in, and
//!   small identifier utilities.
//!
//! - **[`engine`]: The Logic Core.** Configuration, error types, the isomorphism cache,
//!   progress reporting, and the individual reconciliation stages: observed-species
//!   synthesis, identity resolution, flux-pair completion, reactor remapping and
//!   model assembly.
//!
//! - **[`workflows`]: The Public API.** Runs the stages in order against a [`core::models::job::Job`]
//!   and returns the reconciled job together with a report of what was done.

pub mod core;
pub mod engine;
pub mod workflows;

#[cfg(test)]
pub(crate) mod test_utils;
