//! NIF interface for Elixir
//!
//! Stateless wrappers over the constellation pipeline. Constellations are
//! rebuilt from M on every call; building is deterministic so analysis and
//! noise always see the same point order the caller was shown.

use rustler::{Atom, NifMap, NifResult};

use crate::analysis::PointAnalysis;
use crate::noise::{NoiseGenerator, NoiseKind};
use crate::shape::{Constellation, ConstellationParameters, ConstellationPoint};

mod atoms {
    rustler::atoms! {
        gaussian,
        uniform,
    }
}

/// Lattice parameters as an Elixir map
#[derive(NifMap, Debug, Clone)]
pub struct ParametersTerm {
    pub order: u32,
    pub bits_per_symbol: u32,
    pub side: u64,
    pub weight: u64,
    pub corner_side: u64,
    pub points_to_reject: u64,
}

impl From<&ConstellationParameters> for ParametersTerm {
    fn from(p: &ConstellationParameters) -> Self {
        Self {
            order: p.order,
            bits_per_symbol: p.bits_per_symbol,
            side: p.side as u64,
            weight: p.weight,
            corner_side: p.corner_side as u64,
            points_to_reject: p.points_to_reject(),
        }
    }
}

/// One constellation point as an Elixir map
#[derive(NifMap, Debug, Clone)]
pub struct PointTerm {
    pub label: String,
    pub row: u64,
    pub col: u64,
    pub i: f64,
    pub q: f64,
}

impl From<&ConstellationPoint> for PointTerm {
    fn from(p: &ConstellationPoint) -> Self {
        Self {
            label: p.label.clone(),
            row: p.row as u64,
            col: p.col as u64,
            i: p.in_phase,
            q: p.quadrature,
        }
    }
}

fn nif_error(err: impl std::fmt::Display) -> rustler::Error {
    rustler::Error::Term(Box::new(err.to_string()))
}

fn atom_to_noise_kind(atom: Atom) -> Result<NoiseKind, &'static str> {
    if atom == atoms::gaussian() {
        Ok(NoiseKind::Gaussian)
    } else if atom == atoms::uniform() {
        Ok(NoiseKind::Uniform)
    } else {
        Err("unknown noise kind (expected :gaussian or :uniform)")
    }
}

fn build(order: u32) -> NifResult<(Constellation, usize)> {
    crate::shape::build_constellation(order).map_err(nif_error)
}

/// Derive lattice parameters for M
#[rustler::nif]
fn derive_parameters(order: u32) -> NifResult<ParametersTerm> {
    ConstellationParameters::derive(order)
        .map(|p| ParametersTerm::from(&p))
        .map_err(nif_error)
}

/// Build the shaped constellation
///
/// # Returns
/// `{points, removed_count}`
#[rustler::nif]
fn build_constellation(order: u32) -> NifResult<(Vec<PointTerm>, u64)> {
    let (constellation, removed) = build(order)?;
    let points = constellation.iter().map(PointTerm::from).collect();
    Ok((points, removed as u64))
}

/// Energy and phase for selected indices, all-or-nothing
///
/// # Returns
/// List of `{label, energy, phase}`
#[rustler::nif]
fn analyze_points(order: u32, indices: Vec<u64>) -> NifResult<Vec<(String, f64, f64)>> {
    let (constellation, _) = build(order)?;
    let indices: Vec<usize> = indices.into_iter().map(|i| i as usize).collect();
    let results = crate::analysis::analyze_points(&constellation, &indices).map_err(nif_error)?;
    Ok(results
        .into_iter()
        .map(|PointAnalysis { label, energy, phase, .. }| (label, energy, phase))
        .collect())
}

/// Noisy `{i, q}` pairs in constellation order
///
/// # Arguments
/// * `kind` - Atom: :gaussian, :uniform
/// * `level` - Std for gaussian, half-range for uniform (must be > 0)
/// * `seed` - Seed for the ChaCha8 noise stream
#[rustler::nif]
fn inject_noise(order: u32, kind: Atom, level: f64, seed: u64) -> NifResult<Vec<(f64, f64)>> {
    let kind = atom_to_noise_kind(kind).map_err(nif_error)?;
    let (constellation, _) = build(order)?;
    let noisy = NoiseGenerator::new(seed)
        .inject(&constellation, kind, level)
        .map_err(nif_error)?;
    Ok(noisy.iq())
}
