//! # Core Module
//!
//! Fundamental building blocks shared by every reconciliation stage.
//!
//! ## Overview
//!
//! A reconciliation works on two independently produced descriptions of the same
//! chemistry: the job specification (initial species, reactors, termination criteria,
//! sensitivity targets) and the canonical network (species and reactions). This module
//! defines how both are represented in memory and which external capabilities the
//! engine relies on.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Species, reactions, reactor variants and the job itself
//! - **Chemistry Collaborators** ([`chemistry`]) - Isomorphism, flux-pair and rendering traits
//! - **Network Input** ([`io`]) - The canonical-network loader interface
//! - **Utilities** ([`utils`]) - Path-safe naming and bath-gas identifiers

pub mod chemistry;
pub mod io;
pub mod models;
pub mod utils;
