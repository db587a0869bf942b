//! Session configuration

/// Largest M accepted by default; 65 536 points on a 256×256 lattice
pub const DEFAULT_MAX_ORDER: u32 = 1 << 16;

/// Decimal places used when printing coordinates, energies and phases
pub const DEFAULT_PRECISION: usize = 2;

pub const DEFAULT_PLOT_WIDTH: usize = 61;
pub const DEFAULT_PLOT_HEIGHT: usize = 31;

/// Runtime settings for an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the noise generator, entropy when unset
    pub seed: Option<u64>,
    pub precision: usize,
    /// Upper bound on M, guards the k² lattice allocation
    pub max_order: u32,
    pub plot_width: usize,
    pub plot_height: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            precision: DEFAULT_PRECISION,
            max_order: DEFAULT_MAX_ORDER,
            plot_width: DEFAULT_PLOT_WIDTH,
            plot_height: DEFAULT_PLOT_HEIGHT,
        }
    }
}

impl SessionConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<(), String> {
        if self.max_order < 4 {
            return Err(format!("max order {} is below the smallest QAM order (4)", self.max_order));
        }
        if self.precision > 12 {
            return Err(format!("precision {} exceeds 12 decimal places", self.precision));
        }
        if self.plot_width < 5 || self.plot_height < 5 {
            return Err(format!(
                "plot {}x{} is too small (minimum 5x5)",
                self.plot_width, self.plot_height
            ));
        }
        Ok(())
    }
}
