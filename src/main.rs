//! Interactive M-QAM constellation calculator
//!
//! ## Usage
//!
//! ```bash
//! # Random noise each run
//! qam
//!
//! # Reproducible noise, 3 decimals
//! QAM_SEED=42 qam --precision 3
//!
//! # Debug logging on stderr
//! RUST_LOG=qam_constellation=debug qam
//! ```

use std::io;

use anyhow::{anyhow, Result};
use clap::Parser;
use qam_constellation::config::{
    DEFAULT_MAX_ORDER, DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH, DEFAULT_PRECISION,
};
use qam_constellation::{Console, Session, SessionConfig, TextPlot};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "qam")]
#[command(version, about = "Compute, analyze and perturb M-QAM constellations")]
struct Cli {
    /// Seed for the noise generator (random when omitted)
    #[arg(long, env = "QAM_SEED")]
    seed: Option<u64>,

    /// Decimal places in printed values
    #[arg(long, env = "QAM_PRECISION", default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Largest M accepted
    #[arg(long, env = "QAM_MAX_ORDER", default_value_t = DEFAULT_MAX_ORDER)]
    max_order: u32,

    /// Plot width in characters
    #[arg(long, env = "QAM_PLOT_WIDTH", default_value_t = DEFAULT_PLOT_WIDTH)]
    plot_width: usize,

    /// Plot height in lines
    #[arg(long, env = "QAM_PLOT_HEIGHT", default_value_t = DEFAULT_PLOT_HEIGHT)]
    plot_height: usize,
}

impl From<Cli> for SessionConfig {
    fn from(cli: Cli) -> Self {
        Self {
            seed: cli.seed,
            precision: cli.precision,
            max_order: cli.max_order,
            plot_width: cli.plot_width,
            plot_height: cli.plot_height,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr, the session owns stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qam_constellation=warn".into()),
        )
        .init();

    let config = SessionConfig::from(Cli::parse());
    config.validate().map_err(|e| anyhow!(e))?;
    tracing::debug!(?config, "starting session");

    let plot = TextPlot::new(config.plot_width, config.plot_height);
    let console = Console::new(io::stdin().lock(), io::stdout().lock(), plot);

    Session::new(console, config).run()?;

    println!();
    println!("Thanks for using the QAM constellation calculator!");
    Ok(())
}
