//! Full square lattice generation

/// Half-lattice offset keeping every point off both axes
pub const AXIS_OFFSET: f64 = 0.5;

/// One site of the square lattice
#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationPoint {
    pub row: usize,
    pub col: usize,
    /// In-phase coordinate, `row − k/2 + 0.5`
    pub in_phase: f64,
    /// Quadrature coordinate, `col − k/2 + 0.5`
    pub quadrature: f64,
    pub label: String,
    /// Set when the point falls in a removed corner block
    pub removed: bool,
}

impl ConstellationPoint {
    /// Lattice site `(row, col)` on a `side×side` grid
    pub fn new(row: usize, col: usize, side: usize) -> Self {
        let half = (side / 2) as f64;
        Self {
            row,
            col,
            in_phase: row as f64 - half + AXIS_OFFSET,
            quadrature: col as f64 - half + AXIS_OFFSET,
            label: format!("S({},{})", row, col),
            removed: false,
        }
    }

    #[inline]
    pub fn iq(&self) -> (f64, f64) {
        (self.in_phase, self.quadrature)
    }
}

/// Generate all k² lattice points in row-major order, none removed
pub fn generate_grid(side: usize) -> Vec<ConstellationPoint> {
    let mut points = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            points.push(ConstellationPoint::new(row, col, side));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_row_major() {
        let grid = generate_grid(4);
        assert_eq!(grid.len(), 16);
        assert_eq!((grid[0].row, grid[0].col), (0, 0));
        assert_eq!((grid[1].row, grid[1].col), (0, 1));
        assert_eq!((grid[4].row, grid[4].col), (1, 0));
        assert_eq!(grid[15].label, "S(3,3)");
        assert!(grid.iter().all(|p| !p.removed));
    }

    #[test]
    fn test_coordinates_are_centered() {
        let grid = generate_grid(4);
        assert_eq!(grid[0].iq(), (-1.5, -1.5));
        assert_eq!(grid[15].iq(), (1.5, 1.5));

        let sum_i: f64 = grid.iter().map(|p| p.in_phase).sum();
        let sum_q: f64 = grid.iter().map(|p| p.quadrature).sum();
        assert!(sum_i.abs() < 1e-12);
        assert!(sum_q.abs() < 1e-12);
    }

    #[test]
    fn test_no_point_on_axes() {
        for p in generate_grid(6) {
            assert!(p.in_phase != 0.0 && p.quadrature != 0.0, "{} sits on an axis", p.label);
        }
    }
}
