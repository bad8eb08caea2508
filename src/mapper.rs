//! Assign a temperature to every pixel of a target image.
//!
//! Each pixel is converted to HSV and matched against the
//! whole colour bar of a [`LookupTable`]; the temperature of
//! the closest entry is taken. Pixels are independent, so
//! rows may be processed in any order (or in parallel)
//! without changing the result.

use image::RgbImage;
use ndarray::{Array2, Axis, Zip};
use rayon::prelude::*;
use tracing::debug;

use crate::{
    calibration::LookupTable,
    color::{hsv_image, Hsv},
    error::MapError,
    grid::TemperatureGrid,
};

/// A target image converted to HSV, ready to be mapped
/// against a lookup table.
pub struct TemperatureMapper<'a> {
    table: &'a LookupTable,
    hsv: Array2<Hsv>,
}

impl<'a> TemperatureMapper<'a> {
    pub fn new(image: &RgbImage, table: &'a LookupTable) -> Result<Self, MapError> {
        let (wid, ht) = image.dimensions();
        if wid == 0 || ht == 0 {
            return Err(MapError::EmptyImage(wid, ht));
        }
        Ok(TemperatureMapper {
            table,
            hsv: hsv_image(image),
        })
    }

    /// `(height, width)` of the target image.
    pub fn dim(&self) -> (usize, usize) {
        self.hsv.dim()
    }

    pub fn map(&self) -> TemperatureGrid {
        let values = self.hsv.map(|c| self.table.temperature_of(c));
        self.finish(values)
    }

    pub fn map_par(&self) -> TemperatureGrid {
        self.map_par_with(|_| ())
    }

    /// Map rows in parallel, calling `on_row` with the index
    /// of each row once it is done.
    pub fn map_par_with<F>(&self, on_row: F) -> TemperatureGrid
    where
        F: Fn(usize) + Sync,
    {
        let mut values = Array2::<f64>::zeros(self.dim());
        values
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut out)| {
                Zip::from(&mut out)
                    .and(self.hsv.row(row))
                    .for_each(|temp, color| *temp = self.table.temperature_of(color));
                on_row(row);
            });
        self.finish(values)
    }

    fn finish(&self, values: Array2<f64>) -> TemperatureGrid {
        let (ht, wid) = values.dim();
        debug!(width = wid, height = ht, bar = self.table.len(), "mapped image");
        TemperatureGrid::new(values)
    }
}

/// Map every pixel of `image` through `table`.
pub fn map_image(image: &RgbImage, table: &LookupTable) -> Result<TemperatureGrid, MapError> {
    Ok(TemperatureMapper::new(image, table)?.map())
}

/// Same result as [`map_image`], with rows spread across the
/// rayon thread pool.
pub fn map_image_par(image: &RgbImage, table: &LookupTable) -> Result<TemperatureGrid, MapError> {
    Ok(TemperatureMapper::new(image, table)?.map_par())
}
