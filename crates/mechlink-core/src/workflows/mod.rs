//! # Workflows Module
//!
//! High-level entry points that run the full reconciliation pipeline against a job.
//!
//! ## Overview
//!
//! A workflow takes a [`Job`](crate::core::models::job::Job) as written by a user, a
//! [`ReconcileConfig`](crate::engine::config::ReconcileConfig), and a
//! [`Toolkit`](reconcile::Toolkit) of chemistry collaborators. It loads the canonical
//! network, links every species and reaction reference of the job to it, and reports
//! progress along the way.
//!
//! - **Reconciliation** ([`reconcile`]) - network loading, observed-species synthesis,
//!   identity resolution, flux-pair completion, reactor remapping, model assembly and
//!   optional species image rendering.

pub mod reconcile;
