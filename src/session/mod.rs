//! Interactive constellation session
//!
//! An explicit state machine over the pipeline:
//!
//! ```text
//! CollectM → BuildShape → Display → CollectSelection → Analyze
//!     ↑                                                   ↓
//!     └──── AskContinue ← InjectAndDisplay ← CollectNoise ┘
//! ```
//!
//! Any recoverable error abandons the current run and returns to `CollectM`.
//! End of input at a prompt finishes the session.

mod state;

pub use state::{Run, SessionState};

use tracing::{debug, info, warn};

use crate::analysis::{analyze_points, parse_selection};
use crate::config::SessionConfig;
use crate::error::{QamError, QamResult};
use crate::noise::{NoiseGenerator, NoiseKind};
use crate::shape::{Constellation, ConstellationParameters};
use crate::traits::{DisplaySink, Prompt, ScatterPlot};

/// Drives the state machine against a terminal `T`
pub struct Session<T> {
    terminal: T,
    config: SessionConfig,
    noise: NoiseGenerator,
    state: SessionState,
}

impl<T: Prompt + DisplaySink> Session<T> {
    pub fn new(terminal: T, config: SessionConfig) -> Self {
        let noise = NoiseGenerator::from_optional_seed(config.seed);
        Self {
            terminal,
            config,
            noise,
            state: SessionState::CollectM,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Run until the user stops or input runs out
    ///
    /// # Errors
    /// Only terminal I/O failures; everything else restarts the cycle.
    pub fn run(&mut self) -> QamResult<()> {
        while !self.state.is_finished() {
            self.step()?;
        }
        Ok(())
    }

    /// Perform a single transition
    pub fn step(&mut self) -> QamResult<()> {
        let state = std::mem::replace(&mut self.state, SessionState::Finished);
        let from = state.name();

        let next = match self.transition(state) {
            Ok(next) => next,
            Err(err) if err.is_recoverable() => {
                warn!(state = from, error = %err, "run abandoned");
                self.terminal.tell(&format!("Error: {}", err))?;
                SessionState::CollectM
            }
            Err(err) => return Err(err),
        };

        debug!(from, to = next.name(), "session transition");
        self.state = next;
        Ok(())
    }

    fn transition(&mut self, state: SessionState) -> QamResult<SessionState> {
        match state {
            SessionState::CollectM => self.collect_m(),
            SessionState::BuildShape { order } => self.build_shape(order),
            SessionState::Display(run) => self.display(run),
            SessionState::CollectSelection(run) => self.collect_selection(run),
            SessionState::Analyze { run, indices } => self.analyze(run, &indices),
            SessionState::CollectNoise(run) => self.collect_noise(run),
            SessionState::InjectAndDisplay { run, kind, level } => {
                self.inject_and_display(run, kind, level)
            }
            SessionState::AskContinue => self.ask_continue(),
            SessionState::Finished => Ok(SessionState::Finished),
        }
    }

    fn collect_m(&mut self) -> QamResult<SessionState> {
        let Some(text) = self
            .terminal
            .ask("Enter the QAM symbol count M (a power of 2, at least 4):")?
        else {
            return Ok(SessionState::Finished);
        };

        let order = parse_integer(&text)?;
        let limit = self.config.max_order;
        // Orders below 4 pass through so the deriver reports them
        let order = u32::try_from(order)
            .ok()
            .filter(|&o| o <= limit)
            .ok_or(QamError::OrderOutOfRange { order, limit })?;
        Ok(SessionState::BuildShape { order })
    }

    fn build_shape(&mut self, order: u32) -> QamResult<SessionState> {
        let params = ConstellationParameters::derive(order)?;
        let (constellation, removed) = Constellation::build(&params)?;
        let run = Run { constellation, removed };
        info!(
            order,
            side = params.side,
            removed = run.removed,
            cross = params.is_cross(),
            "constellation built"
        );

        let p = self.config.precision;
        let summary = run.constellation.summary();
        let report = [
            String::new(),
            "--- QAM constellation details ---".to_string(),
            format!("Symbol count M: {}", params.order),
            format!("Bits per symbol m: {}", params.bits_per_symbol),
            format!("Lattice side k: {}", params.side),
            format!("Lattice points: {}", params.lattice_size()),
            format!("Points to reject: {}", params.points_to_reject()),
            format!("Lattice points removed: {}", run.removed),
            format!("Average energy: {:.*}", p, summary.average_energy),
            format!("Peak energy: {:.*}", p, summary.peak_energy),
            format!("PAPR: {:.*} dB", p, summary.papr_db),
        ];
        for line in &report {
            self.terminal.tell(line)?;
        }

        Ok(SessionState::Display(run))
    }

    fn display(&mut self, run: Run) -> QamResult<SessionState> {
        let title = format!(
            "M-QAM constellation (original) for M = {}",
            run.constellation.params().order
        );
        let points = run.constellation.iq();
        self.terminal.scatter(&ScatterPlot {
            title: &title,
            series: "Constellation points",
            points: &points,
        })?;
        Ok(SessionState::CollectSelection(run))
    }

    fn collect_selection(&mut self, run: Run) -> QamResult<SessionState> {
        let p = self.config.precision;
        self.terminal.tell("")?;
        self.terminal.tell("--- Choose points to analyze ---")?;
        for (idx, point) in run.constellation.iter().enumerate() {
            self.terminal.tell(&format!(
                "{}: {} -> ({:.*}, {:.*})",
                idx, point.label, p, point.in_phase, p, point.quadrature
            ))?;
        }

        let Some(text) = self
            .terminal
            .ask("Enter the indices of the points to analyze, separated by commas:")?
        else {
            return Ok(SessionState::Finished);
        };
        let indices = parse_selection(&text);
        Ok(SessionState::Analyze { run, indices })
    }

    fn analyze(&mut self, run: Run, indices: &[usize]) -> QamResult<SessionState> {
        let results = analyze_points(&run.constellation, indices)?;

        let p = self.config.precision;
        self.terminal.tell("")?;
        self.terminal.tell("--- Energy and phase ---")?;
        for r in &results {
            self.terminal.tell(&format!(
                "Point {}: energy = {:.*}, phase = {:.*} rad",
                r.label, p, r.energy, p, r.phase
            ))?;
        }
        Ok(SessionState::CollectNoise(run))
    }

    fn collect_noise(&mut self, run: Run) -> QamResult<SessionState> {
        let Some(text) = self.terminal.ask("Noise type to add (gaussian/uniform):")? else {
            return Ok(SessionState::Finished);
        };
        let kind: NoiseKind = text.parse()?;

        let Some(text) = self
            .terminal
            .ask("Noise level (sigma for gaussian, half-range for uniform):")?
        else {
            return Ok(SessionState::Finished);
        };
        let level = parse_real(&text)?;
        if !(level.is_finite() && level > 0.0) {
            return Err(QamError::InvalidLevel { level });
        }

        Ok(SessionState::InjectAndDisplay { run, kind, level })
    }

    fn inject_and_display(
        &mut self,
        run: Run,
        kind: NoiseKind,
        level: f64,
    ) -> QamResult<SessionState> {
        let noisy = self.noise.inject(&run.constellation, kind, level)?;

        let title = format!(
            "M-QAM constellation with {} noise (level {}) for M = {}",
            kind,
            level,
            run.constellation.params().order
        );
        let points = noisy.iq();
        self.terminal.scatter(&ScatterPlot {
            title: &title,
            series: "Noisy points",
            points: &points,
        })?;
        self.terminal.tell(&format!(
            "Mean squared error: {:.*}",
            self.config.precision,
            noisy.mean_squared_error(&run.constellation)
        ))?;

        Ok(SessionState::AskContinue)
    }

    fn ask_continue(&mut self) -> QamResult<SessionState> {
        let answer = self.terminal.ask("Compute another constellation? (yes/no):")?;
        Ok(match answer {
            Some(a) if is_affirmative(&a) => SessionState::CollectM,
            _ => SessionState::Finished,
        })
    }
}

fn parse_integer(text: &str) -> QamResult<i64> {
    let text = text.trim();
    text.parse().map_err(|_| QamError::InvalidInput {
        input: text.to_string(),
        expected: "an integer",
    })
}

fn parse_real(text: &str) -> QamResult<f64> {
    let text = text.trim();
    text.parse().map_err(|_| QamError::InvalidInput {
        input: text.to_string(),
        expected: "a number",
    })
}

/// "yes", "y", "oui", "o", ...
fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with(['y', 'o'])
}
