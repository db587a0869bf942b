//! Error types for constellation building, analysis and noise injection

use thiserror::Error;

/// The requested symbol count cannot be shaped into a valid M-QAM lattice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// M below the smallest QAM order
    #[error("M = {order} is too small (must be at least 4)")]
    TooSmall { order: u32 },

    /// M is not an exact power of two
    #[error("M = {order} is not a power of 2")]
    NotPowerOfTwo { order: u32 },

    /// k² − M is not divisible by the four corners
    #[error("M = {order} on a {side}x{side} lattice leaves {remainder} point(s) that cannot be split across four corners")]
    InexactWeight { order: u32, side: usize, remainder: u64 },

    /// Corner removal produced the wrong number of points
    #[error("shaped constellation has {actual} points, expected {expected} (corner weight {weight} is not {corner_side}²)")]
    CardinalityMismatch {
        expected: usize,
        actual: usize,
        weight: u64,
        corner_side: usize,
    },
}

/// The point selection handed to the analyzer is unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no point indices selected")]
    Empty,

    #[error("index {index} out of range (constellation has {len} points)")]
    OutOfRange { index: usize, len: usize },
}

/// Errors surfaced by the constellation pipeline and its session loop
#[derive(Debug, Error)]
pub enum QamError {
    #[error("invalid constellation shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    #[error("M = {order} is outside the accepted range 4..={limit}")]
    OrderOutOfRange { order: i64, limit: u32 },

    #[error("unknown noise kind '{kind}' (expected 'gaussian' or 'uniform')")]
    InvalidNoiseKind { kind: String },

    #[error("noise level must be positive with a finite spread, got {level}")]
    InvalidLevel { level: f64 },

    #[error("expected {expected}, got '{input}'")]
    InvalidInput { input: String, expected: &'static str },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl QamError {
    /// Whether the session can drop the current run and start over
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, QamError::Io(_))
    }
}

/// Result type for constellation operations
pub type QamResult<T> = Result<T, QamError>;
