//! Seams between the constellation core and its collaborators
//!
//! Each trait covers one orthogonal concern: where noise samples come from,
//! how the user is asked for input, and where point clouds are shown.

mod noise_source;
mod prompt;
mod display;

pub use noise_source::NoiseSource;
pub use prompt::Prompt;
pub use display::{DisplaySink, ScatterPlot};
