//! NoiseSource trait - per-axis additive noise
//!
//! Draws a single real sample for one quadrature rail.
//! Knows nothing about constellations or points.

use rand::Rng;

/// Zero-mean scalar noise distribution
pub trait NoiseSource {
    /// Draw one sample using the caller's random source
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    /// Scale parameter (std for Gaussian, half-range for uniform)
    fn level(&self) -> f64;

    /// Theoretical per-axis variance
    fn variance(&self) -> f64;
}
