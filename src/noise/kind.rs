//! Noise distribution selection

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use crate::error::{QamError, QamResult};
use crate::traits::NoiseSource;

/// Distribution family for the per-axis noise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseKind {
    /// Normal(0, level)
    Gaussian,
    /// Uniform(−level, level)
    Uniform,
}

impl NoiseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseKind::Gaussian => "gaussian",
            NoiseKind::Uniform => "uniform",
        }
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoiseKind {
    type Err = QamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gaussian" => Ok(NoiseKind::Gaussian),
            "uniform" => Ok(NoiseKind::Uniform),
            _ => Err(QamError::InvalidNoiseKind { kind: s.trim().to_string() }),
        }
    }
}

/// A validated per-axis noise distribution
#[derive(Debug, Clone)]
pub enum AxisNoise {
    Gaussian { level: f64, dist: Normal<f64> },
    Uniform { level: f64, dist: Uniform<f64> },
}

impl AxisNoise {
    /// # Errors
    /// `InvalidLevel` unless `level` is finite and strictly positive. A uniform
    /// level must also keep its full width `2·level` finite.
    pub fn new(kind: NoiseKind, level: f64) -> QamResult<Self> {
        if !(level.is_finite() && level > 0.0) {
            return Err(QamError::InvalidLevel { level });
        }
        if kind == NoiseKind::Uniform && !(2.0 * level).is_finite() {
            return Err(QamError::InvalidLevel { level });
        }
        Ok(match kind {
            NoiseKind::Gaussian => AxisNoise::Gaussian {
                level,
                dist: Normal::new(0.0, level).map_err(|_| QamError::InvalidLevel { level })?,
            },
            NoiseKind::Uniform => AxisNoise::Uniform {
                level,
                dist: Uniform::new(-level, level),
            },
        })
    }

    pub fn kind(&self) -> NoiseKind {
        match self {
            AxisNoise::Gaussian { .. } => NoiseKind::Gaussian,
            AxisNoise::Uniform { .. } => NoiseKind::Uniform,
        }
    }
}

impl NoiseSource for AxisNoise {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            AxisNoise::Gaussian { dist, .. } => dist.sample(rng),
            AxisNoise::Uniform { dist, .. } => dist.sample(rng),
        }
    }

    fn level(&self) -> f64 {
        match *self {
            AxisNoise::Gaussian { level, .. } | AxisNoise::Uniform { level, .. } => level,
        }
    }

    fn variance(&self) -> f64 {
        let level = self.level();
        match self {
            AxisNoise::Gaussian { .. } => level * level,
            AxisNoise::Uniform { .. } => level * level / 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_parse_kind() {
        assert_eq!("gaussian".parse::<NoiseKind>().unwrap(), NoiseKind::Gaussian);
        assert_eq!("  Uniform \n".parse::<NoiseKind>().unwrap(), NoiseKind::Uniform);
        assert_eq!(NoiseKind::Gaussian.to_string(), "gaussian");
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "laplace".parse::<NoiseKind>().unwrap_err();
        assert!(matches!(err, QamError::InvalidNoiseKind { ref kind } if kind == "laplace"));
    }

    #[test]
    fn test_level_must_be_positive() {
        for level in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                AxisNoise::new(NoiseKind::Gaussian, level),
                Err(QamError::InvalidLevel { .. })
            ));
            assert!(AxisNoise::new(NoiseKind::Uniform, level).is_err());
        }
    }

    #[test]
    fn test_uniform_width_must_stay_finite() {
        let level = f64::MAX / 1.5;
        assert!(matches!(
            AxisNoise::new(NoiseKind::Uniform, level),
            Err(QamError::InvalidLevel { level: l }) if l == level
        ));
        assert!(AxisNoise::new(NoiseKind::Uniform, 1e308).is_err());

        // Gaussian has no width to overflow
        let noise = AxisNoise::new(NoiseKind::Gaussian, level).unwrap();
        assert_eq!(noise.level(), level);
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let noise = AxisNoise::new(NoiseKind::Uniform, 0.25).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..10_000 {
            let x = noise.sample(&mut rng);
            assert!((-0.25..0.25).contains(&x), "sample {} out of range", x);
        }
    }

    #[test]
    fn test_variance_matches_configuration() {
        for kind in [NoiseKind::Gaussian, NoiseKind::Uniform] {
            let noise = AxisNoise::new(kind, 0.8).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(7);

            let n = 50_000usize;
            let samples: Vec<f64> = (0..n).map(|_| noise.sample(&mut rng)).collect();
            let mean = samples.iter().sum::<f64>() / n as f64;
            let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

            assert!(mean.abs() < 0.02, "{} mean {}", kind, mean);
            assert!(
                (variance - noise.variance()).abs() / noise.variance() < 0.05,
                "{} variance {} vs {}",
                kind,
                variance,
                noise.variance()
            );
        }
    }
}
