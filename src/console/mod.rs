//! Terminal collaborators: line prompt and text scatter plot

mod plot;

use std::io::{self, BufRead, Write};

pub use plot::TextPlot;

use crate::traits::{DisplaySink, Prompt, ScatterPlot};

/// Line-based terminal over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
    plot: TextPlot,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, plot: TextPlot) -> Self {
        Self { input, output, plot }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn tell(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}

impl<R: BufRead, W: Write> DisplaySink for Console<R, W> {
    fn scatter(&mut self, plot: &ScatterPlot<'_>) -> io::Result<()> {
        self.output.write_all(self.plot.render(plot).as_bytes())?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_reads_one_line() {
        let input = b"32\r\nrest\n".as_slice();
        let mut console = Console::new(input, Vec::new(), TextPlot::new(11, 5));

        assert_eq!(console.ask("M?").unwrap().as_deref(), Some("32"));
        assert_eq!(console.ask("next?").unwrap().as_deref(), Some("rest"));
        assert_eq!(console.ask("eof?").unwrap(), None);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "M? next? eof? ");
    }

    #[test]
    fn test_scatter_writes_plot() {
        let mut console = Console::new(b"".as_slice(), Vec::new(), TextPlot::new(11, 5));
        let points = [(0.5, 0.5)];
        console
            .scatter(&ScatterPlot { title: "t", series: "s", points: &points })
            .unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.starts_with("t\n"));
        assert!(out.contains('*'));
    }
}
