//! Noise injection over a whole constellation

use rand::Rng;

use super::kind::{AxisNoise, NoiseKind};
use crate::error::QamResult;
use crate::shape::{Constellation, ConstellationPoint};
use crate::traits::NoiseSource;

/// Perturbed copy of a constellation, same length and order as its source
#[derive(Debug, Clone, PartialEq)]
pub struct NoisyConstellation {
    kind: NoiseKind,
    level: f64,
    points: Vec<ConstellationPoint>,
}

impl NoisyConstellation {
    pub fn kind(&self) -> NoiseKind {
        self.kind
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ConstellationPoint] {
        &self.points
    }

    pub fn iq(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(ConstellationPoint::iq).collect()
    }

    /// Mean of |noisy − clean|² over all points
    ///
    /// `reference` must be the constellation this copy was produced from.
    pub fn mean_squared_error(&self, reference: &Constellation) -> f64 {
        debug_assert_eq!(reference.len(), self.points.len());
        let total: f64 = self
            .points
            .iter()
            .zip(reference.iter())
            .map(|(noisy, clean)| {
                let di = noisy.in_phase - clean.in_phase;
                let dq = noisy.quadrature - clean.quadrature;
                di * di + dq * dq
            })
            .sum();
        total / self.points.len() as f64
    }
}

/// Add independent `kind` noise of scale `level` to both rails of every point
///
/// The I rail of every point is drawn first, then the Q rail, so no draw is
/// shared between axes. The source constellation is left untouched.
///
/// # Errors
/// `InvalidLevel` unless `level` is finite and positive
pub fn inject_noise<R: Rng + ?Sized>(
    constellation: &Constellation,
    kind: NoiseKind,
    level: f64,
    rng: &mut R,
) -> QamResult<NoisyConstellation> {
    let noise = AxisNoise::new(kind, level)?;

    let noise_i: Vec<f64> = (0..constellation.len()).map(|_| noise.sample(&mut *rng)).collect();
    let noise_q: Vec<f64> = (0..constellation.len()).map(|_| noise.sample(&mut *rng)).collect();

    let points = constellation
        .iter()
        .zip(noise_i.iter().zip(&noise_q))
        .map(|(p, (&ni, &nq))| ConstellationPoint {
            in_phase: p.in_phase + ni,
            quadrature: p.quadrature + nq,
            ..p.clone()
        })
        .collect();

    Ok(NoisyConstellation { kind, level, points })
}
