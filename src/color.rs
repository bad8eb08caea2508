//! Colour representation used for matching pixels against
//! a colour bar.
//!
//! Colours are compared in HSV using the common 8-bit
//! convention of vision libraries: hue is stored in degrees
//! halved (`0..180`), saturation and value are scaled to
//! `0..=255`. Both the colour bar and the target image go
//! through [`Hsv::from_rgb`], so distances are always taken
//! in the same space.

use image::{Rgb, RgbImage};
use ndarray::Array2;

/// An 8-bit HSV colour sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

const HUE_RANGE: f64 = 180.;

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Hsv { h, s, v }
    }

    pub fn from_rgb(Rgb([r, g, b]): Rgb<u8>) -> Self {
        let (rf, gf, bf) = (r as f64, g as f64, b as f64);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = (max - min) as f64;
        let v = max as f64;

        let s = if max == 0 { 0. } else { delta / v * 255. };

        let h = if delta == 0. {
            0.
        } else if max == r {
            60. * (gf - bf) / delta
        } else if max == g {
            120. + 60. * (bf - rf) / delta
        } else {
            240. + 60. * (rf - gf) / delta
        };
        let h = if h < 0. { h + 360. } else { h };
        let h = (h / 2.).round() % HUE_RANGE;

        Hsv {
            h: h as u8,
            s: s.round() as u8,
            v: max,
        }
    }

    /// Squared euclidean distance between two samples.
    ///
    /// Ordering by squared distance is the same as ordering
    /// by distance, and stays exact for ties.
    #[inline]
    pub fn distance_sq(&self, other: &Hsv) -> u32 {
        let dh = self.h as i32 - other.h as i32;
        let ds = self.s as i32 - other.s as i32;
        let dv = self.v as i32 - other.v as i32;
        (dh * dh + ds * ds + dv * dv) as u32
    }

    pub fn distance(&self, other: &Hsv) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }
}

/// Convert a decoded image into a `(height, width)` array
/// of HSV samples.
pub fn hsv_image(image: &RgbImage) -> Array2<Hsv> {
    let (wid, ht) = image.dimensions();
    Array2::from_shape_fn((ht as usize, wid as usize), |(row, col)| {
        Hsv::from_rgb(*image.get_pixel(col as u32, row as u32))
    })
}
