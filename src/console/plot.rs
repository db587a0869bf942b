//! Character-grid scatter plot
//!
//! In-phase runs left to right, quadrature bottom to top. The axes are drawn
//! through the origin and the view is symmetric so the origin stays centred.

use crate::traits::ScatterPlot;

const POINT: char = '*';
const H_AXIS: char = '-';
const V_AXIS: char = '|';
const ORIGIN: char = '+';

/// Fixed-size text renderer
#[derive(Debug, Clone, Copy)]
pub struct TextPlot {
    width: usize,
    height: usize,
}

impl TextPlot {
    /// Sizes below 3 are raised to 3 so the axes always fit
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(3),
            height: height.max(3),
        }
    }

    /// Half-width of the view, 10% beyond the farthest coordinate
    fn extent(points: &[(f64, f64)]) -> f64 {
        let max = points
            .iter()
            .flat_map(|&(i, q)| [i.abs(), q.abs()])
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }

    /// Map `v` in [−extent, extent] onto cell 0..cells
    fn cell(v: f64, extent: f64, cells: usize) -> usize {
        let span = (cells - 1) as f64;
        let pos = ((v + extent) / (2.0 * extent) * span).round();
        pos.clamp(0.0, span) as usize
    }

    pub fn render(&self, plot: &ScatterPlot<'_>) -> String {
        let extent = Self::extent(plot.points);
        let mut grid = vec![vec![' '; self.width]; self.height];

        let axis_col = Self::cell(0.0, extent, self.width);
        let axis_row = self.height - 1 - Self::cell(0.0, extent, self.height);
        for cell in grid[axis_row].iter_mut() {
            *cell = H_AXIS;
        }
        for row in grid.iter_mut() {
            row[axis_col] = V_AXIS;
        }
        grid[axis_row][axis_col] = ORIGIN;

        for &(i, q) in plot.points.iter().filter(|(i, q)| i.is_finite() && q.is_finite()) {
            let col = Self::cell(i, extent, self.width);
            let row = self.height - 1 - Self::cell(q, extent, self.height);
            grid[row][col] = POINT;
        }

        let mut out = String::with_capacity((self.width + 1) * (self.height + 4));
        out.push_str(plot.title);
        out.push('\n');
        for row in grid {
            out.extend(row);
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {} ({} points)  In-Phase: [{:.2}, {:.2}]  Quadrature: [{:.2}, {:.2}]\n",
            POINT,
            plot.series,
            plot.points.len(),
            -extent,
            extent,
            -extent,
            extent
        ));
        out
    }
}
