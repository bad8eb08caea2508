//! Derive a colour to temperature lookup table from a
//! reference colour bar.
//!
//! The colour bar is assumed to run vertically, with the
//! gradient uniform across each row: one sample is taken per
//! row at the middle column, and the rows are paired with
//! temperatures evenly spaced from the minimum (top) to the
//! maximum (bottom) of the configured range.

use image::{imageops, RgbImage};
use tracing::debug;

use crate::{
    color::Hsv,
    error::CalibrationError,
    settings::{LegendRegion, TemperatureBounds},
};

/// Colour bar samples paired index-wise with temperatures.
///
/// Never empty: every constructor rejects empty bars.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    colors: Vec<Hsv>,
    temperatures: Vec<f64>,
}

impl LookupTable {
    pub fn new(colors: Vec<Hsv>, temperatures: Vec<f64>) -> Result<Self, CalibrationError> {
        if colors.len() != temperatures.len() {
            return Err(CalibrationError::LengthMismatch(
                colors.len(),
                temperatures.len(),
            ));
        }
        if colors.is_empty() {
            return Err(CalibrationError::EmptyColorBar);
        }
        Ok(LookupTable {
            colors,
            temperatures,
        })
    }

    /// Sample the colour bar along the middle column of
    /// `reference`, one entry per row.
    pub fn from_reference(
        reference: &RgbImage,
        bounds: TemperatureBounds,
    ) -> Result<Self, CalibrationError> {
        let (wid, ht) = reference.dimensions();
        if wid == 0 || ht == 0 {
            return Err(CalibrationError::EmptyReference(wid, ht));
        }

        let col = wid / 2;
        let colors: Vec<Hsv> = (0..ht)
            .map(|row| Hsv::from_rgb(*reference.get_pixel(col, row)))
            .collect();
        let temperatures = bounds.linspace(colors.len());
        debug!(
            rows = ht,
            column = col,
            min = bounds.min,
            max = bounds.max,
            "sampled colour bar"
        );

        Self::new(colors, temperatures)
    }

    /// Like [`from_reference`][Self::from_reference], but
    /// only looks at `region` of the image when given.
    pub fn from_legend(
        image: &RgbImage,
        region: Option<LegendRegion>,
        bounds: TemperatureBounds,
    ) -> Result<Self, CalibrationError> {
        match region {
            None => Self::from_reference(image, bounds),
            Some(region) => {
                let (wid, ht) = image.dimensions();
                region.validate(wid, ht)?;
                let legend =
                    imageops::crop_imm(image, region.x, region.y, region.width, region.height)
                        .to_image();
                Self::from_reference(&legend, bounds)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Hsv] {
        &self.colors
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    /// Index of the colour bar entry closest to `color`. The
    /// lowest index wins among equally close entries.
    pub fn nearest_index(&self, color: &Hsv) -> usize {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;
        for (i, entry) in self.colors.iter().enumerate() {
            let dist = entry.distance_sq(color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0 {
                    break;
                }
            }
        }
        best_idx
    }

    pub fn temperature_of(&self, color: &Hsv) -> f64 {
        self.temperatures[self.nearest_index(color)]
    }
}
