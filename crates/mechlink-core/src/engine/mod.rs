//! # Engine Module
//!
//! Implements the reconciliation pipeline that links a job specification to its
//! canonical reaction network.
//!
//! ## Overview
//!
//! The engine runs a strict linear sequence of stages over a job:
//!
//! 1. **Observed-species synthesis** - sampled reactors get an observed copy of every
//!    trackable reactive species appended to the canonical list.
//! 2. **Identity resolution** - every specification species is matched to the first
//!    structurally equivalent canonical species.
//! 3. **Flux-pair completion** - reactions without cached flux pairs get them derived.
//! 4. **Reactor remapping** - every species reference held by a reactor is rewritten to
//!    its canonical counterpart, with one field layout per reactor variant.
//! 5. **Assembly** - the canonical lists become the job's core reaction model, and
//!    species images are rendered when requested.
//!
//! There is no retry or rollback: a failure in any stage aborts the reconciliation.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Input locations, feature switches, TOML loading
//! - **Error Handling** ([`error`]) - Engine error types naming the offending species or reaction
//! - **Identity Map** ([`species_map`]) - Specification-to-canonical species mapping
//! - **Progress Monitoring** ([`progress`]) - Stage and task progress events
//! - **Results** ([`state`]) - The report returned by a completed reconciliation

pub(crate) mod cache;
pub mod config;
pub mod error;
pub mod progress;
pub mod species_map;
pub mod state;
pub(crate) mod tasks;
