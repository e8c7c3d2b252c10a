use std::fmt;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    LoadNetwork,
    SynthesizeObserved,
    ResolveIdentity,
    CompletePairs,
    RemapReactors,
    Assemble,
    RenderImages,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::LoadNetwork => "Loading Canonical Network",
            Stage::SynthesizeObserved => "Synthesizing Observed Species",
            Stage::ResolveIdentity => "Resolving Species Identity",
            Stage::CompletePairs => "Completing Flux Pairs",
            Stage::RemapReactors => "Remapping Reactors",
            Stage::Assemble => "Assembling Reaction Model",
            Stage::RenderImages => "Rendering Species Images",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub enum Progress {
    StageStart { stage: Stage },
    StageFinish { stage: Stage },

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
