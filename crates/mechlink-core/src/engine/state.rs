use std::path::PathBuf;

/// A species image that could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub label: String,
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of the image generation stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageReport {
    /// Directory the images were written to; `None` when generation was disabled.
    pub directory: Option<PathBuf>,
    pub rendered: Vec<PathBuf>,
    /// Images that already existed and were left untouched.
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<RenderFailure>,
}

/// Summary of a completed reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Labels of observed species added to the canonical list.
    pub synthesized: Vec<String>,
    /// Labels of specification-side species with no canonical counterpart.
    pub unmatched: Vec<String>,
    /// Number of reactions whose flux pairs were derived during this run.
    pub pairs_generated: usize,
    pub images: ImageReport,
}
