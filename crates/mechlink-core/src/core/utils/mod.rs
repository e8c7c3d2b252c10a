//! Small lookup tables and string helpers shared across the crate.

pub mod identifiers;
