//! Corner removal: square lattice → cross constellation
//!
//! The four `s×s` corner blocks are marked through 4-fold symmetry, only the
//! top-left quadrant is enumerated. Survivors are then collected with a
//! keep/skip pass so removal never reorders or shifts indices mid-delete.

use super::grid::ConstellationPoint;

/// Mark the four `corner_side × corner_side` corner blocks as removed
///
/// `points` must be the row-major `side×side` lattice from `generate_grid`.
/// Returns the number of distinct points marked.
pub fn mark_corners(points: &mut [ConstellationPoint], side: usize, corner_side: usize) -> usize {
    debug_assert_eq!(points.len(), side * side);

    let s = corner_side.min(side);
    let mut marked = 0;
    for i in 0..s {
        for j in 0..s {
            let far_i = side - 1 - i;
            let far_j = side - 1 - j;
            for (row, col) in [(i, j), (i, far_j), (far_i, j), (far_i, far_j)] {
                let point = &mut points[row * side + col];
                if !point.removed {
                    point.removed = true;
                    marked += 1;
                }
            }
        }
    }
    marked
}

/// Keep the points not marked removed, preserving their relative order
pub fn collect_survivors(points: Vec<ConstellationPoint>) -> Vec<ConstellationPoint> {
    points.into_iter().filter(|p| !p.removed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::grid::generate_grid;

    /// Whether `(row, col)` lies in one of the four corner blocks
    fn in_corner(row: usize, col: usize, side: usize, corner_side: usize) -> bool {
        let near = |x: usize| x < corner_side || x + corner_side >= side;
        near(row) && near(col)
    }

    #[test]
    fn test_no_removal_when_corner_side_zero() {
        let mut grid = generate_grid(4);
        let before = grid.clone();
        assert_eq!(mark_corners(&mut grid, 4, 0), 0);
        assert_eq!(collect_survivors(grid), before);
    }

    #[test]
    fn test_qam32_removes_the_four_corners() {
        let mut grid = generate_grid(6);
        assert_eq!(mark_corners(&mut grid, 6, 1), 4);

        let removed: Vec<&str> = grid.iter().filter(|p| p.removed).map(|p| p.label.as_str()).collect();
        assert_eq!(removed, ["S(0,0)", "S(0,5)", "S(5,0)", "S(5,5)"]);

        let survivors = collect_survivors(grid);
        assert_eq!(survivors.len(), 32);
        assert_eq!(survivors[0].label, "S(0,1)");
        assert_eq!(survivors[31].label, "S(5,4)");
    }

    #[test]
    fn test_survivors_keep_row_major_order() {
        let mut grid = generate_grid(12);
        mark_corners(&mut grid, 12, 2);
        let survivors = collect_survivors(grid);
        assert_eq!(survivors.len(), 128);
        for pair in survivors.windows(2) {
            assert!((pair[0].row, pair[0].col) < (pair[1].row, pair[1].col));
        }
    }

    #[test]
    fn test_marking_matches_corner_predicate() {
        let (side, s) = (24, 4);
        let mut grid = generate_grid(side);
        mark_corners(&mut grid, side, s);
        for p in &grid {
            assert_eq!(p.removed, in_corner(p.row, p.col, side, s), "{}", p.label);
        }
    }

    #[test]
    fn test_overlapping_blocks_are_counted_once() {
        // s > k/2 makes the blocks overlap, every site is hit at least once
        let mut grid = generate_grid(3);
        assert_eq!(mark_corners(&mut grid, 3, 2), 9);
    }
}
