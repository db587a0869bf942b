//! Utility functions for lattice arithmetic

mod math;

pub use math::*;
