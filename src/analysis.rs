//! Per-point energy and phase for a selection of constellation indices

use crate::error::SelectionError;
use crate::shape::Constellation;
use crate::utils::{energy, magnitude, phase};

/// Energy and phase of one selected point
#[derive(Debug, Clone, PartialEq)]
pub struct PointAnalysis {
    pub index: usize,
    pub label: String,
    /// I² + Q²
    pub energy: f64,
    /// Distance from the origin, sqrt(energy)
    pub amplitude: f64,
    /// atan2(Q, I) in radians
    pub phase: f64,
}

/// Analyze the selected points
///
/// All-or-nothing: an empty selection or any out-of-range index rejects the
/// whole batch before anything is computed. Order and duplicates in
/// `indices` are kept.
pub fn analyze_points(
    constellation: &Constellation,
    indices: &[usize],
) -> Result<Vec<PointAnalysis>, SelectionError> {
    if indices.is_empty() {
        return Err(SelectionError::Empty);
    }
    let len = constellation.len();
    if let Some(&index) = indices.iter().find(|&&idx| idx >= len) {
        return Err(SelectionError::OutOfRange { index, len });
    }

    Ok(indices
        .iter()
        .map(|&index| {
            let point = &constellation.points()[index];
            PointAnalysis {
                index,
                label: point.label.clone(),
                energy: energy(point.in_phase, point.quadrature),
                amplitude: magnitude(point.in_phase, point.quadrature),
                phase: phase(point.in_phase, point.quadrature),
            }
        })
        .collect())
}

/// Parse a comma-separated index list
///
/// Tokens are trimmed; anything that is not plain decimal digits is dropped.
/// A digit run too long for `usize` saturates to `usize::MAX`, so it is still
/// out of range for `analyze_points`.
pub fn parse_selection(text: &str) -> Vec<usize> {
    text.split(',')
        .map(str::trim)
        .filter(|tok| !tok.is_empty() && tok.bytes().all(|b| b.is_ascii_digit()))
        .map(|tok| tok.parse().unwrap_or(usize::MAX))
        .collect()
}
