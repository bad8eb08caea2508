//! Per-pixel temperatures of a mapped image, and read-only
//! access to them by pixel position.

use std::io::Write;

use anyhow::Result;
use itertools::iproduct;
use ndarray::{parallel::prelude::*, Array2};

use crate::stats::Stats;

/// Temperatures indexed by `(row, col)`, i.e. `(y, x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureGrid {
    values: Array2<f64>,
}

impl TemperatureGrid {
    pub fn new(values: Array2<f64>) -> Self {
        TemperatureGrid { values }
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// `(height, width)`.
    pub fn dim(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn width(&self) -> usize {
        self.values.ncols()
    }

    pub fn height(&self) -> usize {
        self.values.nrows()
    }

    /// Temperature at pixel `(x, y)`, with the coordinates
    /// clamped to the grid. `None` only for an empty grid.
    pub fn at(&self, x: i64, y: i64) -> Option<f64> {
        let (ht, wid) = self.dim();
        if ht == 0 || wid == 0 {
            return None;
        }
        let col = x.max(0).min(wid as i64 - 1) as usize;
        let row = y.max(0).min(ht as i64 - 1) as usize;
        Some(self.values[(row, col)])
    }

    /// Temperature under a pointer at `(x, y)` in image
    /// pixel units. The position is truncated to a whole
    /// pixel; non-finite positions read nothing.
    pub fn at_pointer(&self, x: f64, y: f64) -> Option<f64> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        self.at(x.trunc() as i64, y.trunc() as i64)
    }

    pub fn stats(&self) -> Stats {
        self.values
            .par_iter()
            .fold(Stats::default, |mut acc, &val| {
                acc += val;
                acc
            })
            .reduce(Stats::default, |mut acc, part| {
                acc += &part;
                acc
            })
    }

    /// Write `x,y,temp` rows, row by row.
    pub fn write_csv<W: Write>(&self, mut out: W) -> Result<()> {
        let (ht, wid) = self.dim();
        writeln!(out, "x,y,temp")?;
        for (row, col) in iproduct!(0..ht, 0..wid) {
            writeln!(out, "{},{},{}", col, row, self.values[(row, col)])?;
        }
        out.flush()?;
        Ok(())
    }
}

/// The text shown for a temperature under the pointer.
pub fn readout(temp: f64) -> String {
    format!("Temperature: {:.2} °C", temp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn grid() -> TemperatureGrid {
        TemperatureGrid::new(array![[20., 30., 40.], [50., 60., 70.]])
    }

    #[test]
    fn clamps_coordinates() {
        let grid = grid();
        assert_eq!(grid.at(1, 1), Some(60.));
        assert_eq!(grid.at(-5, 0), Some(20.));
        assert_eq!(grid.at(10, -1), Some(40.));
        assert_eq!(grid.at(10, 10), Some(70.));

        let empty = TemperatureGrid::new(Array2::zeros((0, 3)));
        assert_eq!(empty.at(0, 0), None);
    }

    #[test]
    fn pointer_positions_truncate() {
        let grid = grid();
        assert_eq!(grid.at_pointer(0.99, 0.2), Some(20.));
        assert_eq!(grid.at_pointer(2.5, 1.7), Some(70.));
        assert_eq!(grid.at_pointer(-0.5, 0.), Some(20.));
        assert_eq!(grid.at_pointer(f64::NAN, 0.), None);
        assert_eq!(grid.at_pointer(0., f64::INFINITY), None);
    }

    #[test]
    fn readout_format() {
        assert_eq!(readout(60.), "Temperature: 60.00 °C");
        assert_eq!(readout(21.456), "Temperature: 21.46 °C");
    }

    #[test]
    fn csv_lists_every_pixel() {
        let mut buf = vec![];
        grid().write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "x,y,temp");
        assert_eq!(lines[1], "0,0,20");
        assert_eq!(lines[3], "2,0,40");
        assert_eq!(lines[4], "0,1,50");
    }

    #[test]
    fn stats_over_grid() {
        let stats = grid().stats();
        assert_eq!(stats.count, 6);
        assert_eq!(stats.min, 20.);
        assert_eq!(stats.max, 70.);
        assert_eq!(stats.mean(), Some(45.));
    }

    #[test]
    fn stats_merge_partial_sums() {
        let values = Array2::from_shape_fn((64, 48), |(row, col)| (row * 48 + col) as f64);
        let stats = TemperatureGrid::new(values).stats();
        assert_eq!(stats.count, 64 * 48);
        assert_eq!(stats.min, 0.);
        assert_eq!(stats.max, (64 * 48 - 1) as f64);
        assert_eq!(stats.mean(), Some((64 * 48 - 1) as f64 / 2.));
    }
}
