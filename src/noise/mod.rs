//! Additive per-axis noise on a shaped constellation
//!
//! I and Q receive independent draws from the same zero-mean
//! distribution. This is rail-wise noise, not circularly-symmetric
//! complex noise.

mod kind;
mod inject;
mod generator;

pub use kind::{AxisNoise, NoiseKind};
pub use inject::{inject_noise, NoisyConstellation};
pub use generator::NoiseGenerator;
