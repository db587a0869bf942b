//! Lattice shape parameters derived from the symbol count M

use crate::error::ShapeError;
use crate::utils::{exact_log2, isqrt};

/// Geometry of the square lattice enclosing an M-point constellation
///
/// Even bit counts give a full `k×k` square. Odd bit counts give the
/// minimal-energy cross: a `3·2^((m-3)/2)` square with four `s×s` corner
/// blocks removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstellationParameters {
    /// Target symbol count M
    pub order: u32,
    /// m = log2(M)
    pub bits_per_symbol: u32,
    /// Side k of the enclosing square lattice
    pub side: usize,
    /// Points to remove from each corner, (k² − M) / 4
    pub weight: u64,
    /// Side s of each removed corner block, floor(sqrt(weight))
    pub corner_side: usize,
}

impl ConstellationParameters {
    /// Derive the lattice shape for M
    ///
    /// # Errors
    /// `TooSmall` for M < 4, `NotPowerOfTwo` when log2(M) is not integral,
    /// `InexactWeight` when k² − M does not split evenly across the corners
    /// (M = 8 is the only power of two that hits this).
    pub fn derive(order: u32) -> Result<Self, ShapeError> {
        if order < 4 {
            return Err(ShapeError::TooSmall { order });
        }
        let m = exact_log2(order).ok_or(ShapeError::NotPowerOfTwo { order })?;

        let side: usize = if m % 2 == 0 {
            1 << (m / 2)
        } else {
            3 << ((m - 3) / 2)
        };

        let area = (side as u64) * (side as u64);
        let excess = area - u64::from(order);
        if excess % 4 != 0 {
            return Err(ShapeError::InexactWeight {
                order,
                side,
                remainder: excess % 4,
            });
        }
        let weight = excess / 4;

        Ok(Self {
            order,
            bits_per_symbol: m,
            side,
            weight,
            corner_side: isqrt(weight) as usize,
        })
    }

    /// Total points the corners should give up, 4·weight
    pub fn points_to_reject(&self) -> u64 {
        4 * self.weight
    }

    /// Points on the full square lattice, k²
    pub fn lattice_size(&self) -> usize {
        self.side * self.side
    }

    /// True for odd bit counts, where the lattice is cut into a cross
    pub fn is_cross(&self) -> bool {
        self.weight > 0
    }

    /// Whether the corner blocks account for exactly 4·weight points
    pub fn corners_are_square(&self) -> bool {
        (self.corner_side as u64) * (self.corner_side as u64) == self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_orders() {
        for (order, m, k) in [(4u32, 2u32, 2usize), (16, 4, 4), (64, 6, 8), (256, 8, 16)] {
            let p = ConstellationParameters::derive(order).unwrap();
            assert_eq!(p.bits_per_symbol, m);
            assert_eq!(p.side, k);
            assert_eq!(p.weight, 0);
            assert_eq!(p.corner_side, 0);
            assert!(!p.is_cross());
        }
    }

    #[test]
    fn test_qam32_is_cross() {
        let p = ConstellationParameters::derive(32).unwrap();
        assert_eq!(p.bits_per_symbol, 5);
        assert_eq!(p.side, 6);
        assert_eq!(p.weight, 1);
        assert_eq!(p.corner_side, 1);
        assert_eq!(p.points_to_reject(), 4);
        assert_eq!(p.lattice_size(), 36);
        assert!(p.is_cross());
    }

    #[test]
    fn test_larger_cross_orders() {
        let p = ConstellationParameters::derive(128).unwrap();
        assert_eq!((p.side, p.weight, p.corner_side), (12, 4, 2));

        let p = ConstellationParameters::derive(512).unwrap();
        assert_eq!((p.side, p.weight, p.corner_side), (24, 16, 4));

        for order in [32u32, 128, 512, 2048, 8192] {
            assert!(ConstellationParameters::derive(order).unwrap().corners_are_square());
        }
    }

    #[test]
    fn test_rejects_small_and_non_power() {
        assert_eq!(
            ConstellationParameters::derive(2),
            Err(ShapeError::TooSmall { order: 2 })
        );
        assert_eq!(
            ConstellationParameters::derive(0),
            Err(ShapeError::TooSmall { order: 0 })
        );
        assert_eq!(
            ConstellationParameters::derive(48),
            Err(ShapeError::NotPowerOfTwo { order: 48 })
        );
    }

    #[test]
    fn test_qam8_weight_is_inexact() {
        // 3x3 lattice, 9 − 8 = 1 point cannot be split across four corners
        assert_eq!(
            ConstellationParameters::derive(8),
            Err(ShapeError::InexactWeight { order: 8, side: 3, remainder: 1 })
        );
    }

    #[test]
    fn test_largest_order_does_not_overflow() {
        let p = ConstellationParameters::derive(1 << 31).unwrap();
        assert_eq!(p.side, 3 << 14);
        assert!(p.corners_are_square());
    }
}
