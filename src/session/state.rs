//! Session states and the per-run data they carry

use crate::noise::NoiseKind;
use crate::shape::Constellation;

/// Artifacts of one constellation run
///
/// Dropped as a whole when a run is abandoned.
#[derive(Debug, Clone)]
pub struct Run {
    pub constellation: Constellation,
    /// Lattice points removed by corner shaping
    pub removed: usize,
}

/// One step of the interactive cycle
#[derive(Debug, Clone)]
pub enum SessionState {
    /// Ask for the symbol count M
    CollectM,
    /// Derive parameters and shape the lattice
    BuildShape { order: u32 },
    /// Plot the clean constellation
    Display(Run),
    /// List the points and ask which to analyze
    CollectSelection(Run),
    /// Report energy and phase of the selection
    Analyze { run: Run, indices: Vec<usize> },
    /// Ask for noise kind and level
    CollectNoise(Run),
    /// Perturb and plot the noisy copy
    InjectAndDisplay { run: Run, kind: NoiseKind, level: f64 },
    /// Ask whether to start over
    AskContinue,
    Finished,
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::CollectM => "collect_m",
            SessionState::BuildShape { .. } => "build_shape",
            SessionState::Display(_) => "display",
            SessionState::CollectSelection(_) => "collect_selection",
            SessionState::Analyze { .. } => "analyze",
            SessionState::CollectNoise(_) => "collect_noise",
            SessionState::InjectAndDisplay { .. } => "inject_and_display",
            SessionState::AskContinue => "ask_continue",
            SessionState::Finished => "finished",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, SessionState::Finished)
    }
}
