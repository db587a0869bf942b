//! QAM Constellation - M-QAM lattice shaping and analysis
//!
//! Builds the square or cross constellation for any M = 2^m ≥ 4 (M = 8
//! excepted), reports per-point energy and phase, and perturbs the points
//! with seedable per-axis Gaussian or uniform noise.
//!
//! ```
//! use qam_constellation::{analyze_points, build_constellation};
//!
//! let (qam32, removed) = build_constellation(32).unwrap();
//! assert_eq!((qam32.len(), removed), (32, 4));
//!
//! let picked = analyze_points(&qam32, &[0]).unwrap();
//! assert_eq!(picked[0].label, "S(0,1)");
//! ```

pub mod error;
pub mod traits;
pub mod shape;
pub mod analysis;
pub mod noise;
pub mod config;
pub mod session;
pub mod console;
#[cfg(feature = "nif")]
pub mod nif;
mod utils;

// Re-export core types for convenience
pub use error::{QamError, QamResult, SelectionError, ShapeError};
pub use traits::{DisplaySink, NoiseSource, Prompt, ScatterPlot};
pub use shape::{build_constellation, Constellation, ConstellationParameters, ConstellationPoint, ConstellationSummary};
pub use analysis::{analyze_points, parse_selection, PointAnalysis};
pub use noise::{inject_noise, AxisNoise, NoiseGenerator, NoiseKind, NoisyConstellation};
pub use config::SessionConfig;
pub use session::{Session, SessionState};
pub use console::{Console, TextPlot};

/// Derive lattice parameters for M
pub fn derive_parameters(order: u32) -> Result<ConstellationParameters, ShapeError> {
    ConstellationParameters::derive(order)
}

#[cfg(feature = "nif")]
rustler::init!("Elixir.QamConstellation.Native");
