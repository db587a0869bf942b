//! The shaped M-point constellation

use super::corners::{collect_survivors, mark_corners};
use super::grid::{generate_grid, ConstellationPoint};
use super::params::ConstellationParameters;
use crate::error::ShapeError;
use crate::utils::{energy, power_to_db};

/// Surviving lattice points of an M-QAM constellation, in row-major order
///
/// Read-only once built. A point's index in this sequence is the handle used
/// for analysis and selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Constellation {
    params: ConstellationParameters,
    points: Vec<ConstellationPoint>,
}

/// Energy statistics over all constellation points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationSummary {
    pub average_energy: f64,
    pub peak_energy: f64,
    /// Peak-to-average power ratio in dB
    pub papr_db: f64,
    /// Scale giving unit average power, 1/sqrt(average energy)
    pub normalization: f64,
}

impl Constellation {
    /// Build the square lattice and cut its corners
    ///
    /// Returns the constellation together with the number of lattice points
    /// removed. Fails with `CardinalityMismatch` when the result does not hold
    /// exactly M points, which happens when `weight` is not a perfect square.
    pub fn build(params: &ConstellationParameters) -> Result<(Self, usize), ShapeError> {
        let mut lattice = generate_grid(params.side);
        let removed = mark_corners(&mut lattice, params.side, params.corner_side);
        let points = collect_survivors(lattice);

        let expected = params.order as usize;
        if points.len() != expected {
            return Err(ShapeError::CardinalityMismatch {
                expected,
                actual: points.len(),
                weight: params.weight,
                corner_side: params.corner_side,
            });
        }

        Ok((Self { params: *params, points }, removed))
    }

    pub fn params(&self) -> &ConstellationParameters {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ConstellationPoint> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[ConstellationPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConstellationPoint> {
        self.points.iter()
    }

    /// `(I, Q)` pairs in index order, for display sinks
    pub fn iq(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(ConstellationPoint::iq).collect()
    }

    pub fn summary(&self) -> ConstellationSummary {
        let energies = self.points.iter().map(|p| energy(p.in_phase, p.quadrature));
        let (total, peak) = energies.fold((0.0, 0.0_f64), |(sum, max), e| (sum + e, max.max(e)));
        let average_energy = total / self.points.len() as f64;

        ConstellationSummary {
            average_energy,
            peak_energy: peak,
            papr_db: power_to_db(peak / average_energy),
            normalization: 1.0 / average_energy.sqrt(),
        }
    }
}

impl<'a> IntoIterator for &'a Constellation {
    type Item = &'a ConstellationPoint;
    type IntoIter = std::slice::Iter<'a, ConstellationPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Derive parameters for M and build its constellation in one step
pub fn build_constellation(order: u32) -> Result<(Constellation, usize), ShapeError> {
    let params = ConstellationParameters::derive(order)?;
    Constellation::build(&params)
}
