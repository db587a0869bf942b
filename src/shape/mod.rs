//! Constellation shaping
//!
//! M → lattice parameters → full `k×k` grid → corner removal:
//! - even log2(M): square lattice, nothing removed (4, 16, 64, 256, ...)
//! - odd log2(M): cross lattice, four `s×s` corners removed (32, 128, 512, ...)

mod params;
mod grid;
mod corners;
mod constellation;

pub use params::ConstellationParameters;
pub use grid::{generate_grid, ConstellationPoint, AXIS_OFFSET};
pub use corners::{collect_survivors, mark_corners};
pub use constellation::{build_constellation, Constellation, ConstellationSummary};
