//! DisplaySink trait - scatter plot output

use std::io;

/// A titled set of I/Q points to draw
#[derive(Debug, Clone, Copy)]
pub struct ScatterPlot<'a> {
    pub title: &'a str,
    /// Legend text for the series
    pub series: &'a str,
    pub points: &'a [(f64, f64)],
}

/// Renders point clouds; nothing is returned to the caller
pub trait DisplaySink {
    fn scatter(&mut self, plot: &ScatterPlot<'_>) -> io::Result<()>;
}
