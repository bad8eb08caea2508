//! Write a temperature grid as a 16-bit grayscale image.
//!
//! Temperatures are scaled linearly so that `min` maps to 0
//! and `max` to `u16::MAX`; values outside are clamped.

use std::{
    fs::File,
    io::{BufWriter, Cursor},
    path::Path,
};

use anyhow::{bail, ensure, Result};
use byteordered::{ByteOrdered, Endian};
use image::tiff::TiffEncoder;

use crate::grid::TemperatureGrid;

pub struct ScaleTransform {
    pub coeffs: [f64; 2],
}

impl ScaleTransform {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        ensure!(
            min.is_finite() && max.is_finite() && min < max,
            "invalid output range: {} to {}",
            min,
            max
        );
        let factor = u16::MAX as f64 / (max - min);
        Ok(ScaleTransform {
            coeffs: [-min * factor, factor],
        })
    }

    pub fn transform(&self, val: f64) -> u16 {
        let tval = self.coeffs[0] + self.coeffs[1] * val;
        tval.max(0.).min(u16::MAX as f64).round() as u16
    }

    /// `(offset, slope)` of the inverse, from stored value
    /// back to temperature.
    pub fn inverse_coeffs(&self) -> [f64; 2] {
        [-self.coeffs[0] / self.coeffs[1], 1. / self.coeffs[1]]
    }

    fn encode<E: Endian>(
        &self,
        grid: &TemperatureGrid,
        mut buffer: ByteOrdered<Cursor<Vec<u8>>, E>,
    ) -> Result<Vec<u8>> {
        for &val in grid.values().iter() {
            buffer.write_u16(self.transform(val))?;
        }
        Ok(buffer.into_inner().into_inner())
    }

    pub fn write_tiff(&self, grid: &TemperatureGrid, path: &Path) -> Result<()> {
        let (ht, wid) = grid.dim();
        let bytes = self.encode(grid, ByteOrdered::native(buffer_for(grid)))?;
        let writer = BufWriter::new(File::create(path)?);
        TiffEncoder::new(writer).encode(&bytes, wid as u32, ht as u32, image::ColorType::L16)?;
        Ok(())
    }

    pub fn write_png(&self, grid: &TemperatureGrid, path: &Path) -> Result<()> {
        let (ht, wid) = grid.dim();
        let bytes = self.encode(grid, ByteOrdered::be(buffer_for(grid)))?;
        let writer = BufWriter::new(File::create(path)?);
        let mut encoder = png::Encoder::new(writer, wid as u32, ht as u32);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Sixteen);
        encoder.write_header()?.write_image_data(&bytes)?;
        Ok(())
    }

    /// Pick the encoder from the extension of `path`.
    pub fn write(&self, grid: &TemperatureGrid, path: &Path) -> Result<()> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("tif") | Some("tiff") => self.write_tiff(grid, path),
            Some("png") => self.write_png(grid, path),
            _ => bail!("unsupported output format: {:?} (use .tif or .png)", path),
        }
    }
}

fn buffer_for(grid: &TemperatureGrid) -> Cursor<Vec<u8>> {
    let (ht, wid) = grid.dim();
    Cursor::new(Vec::with_capacity(2 * ht * wid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GenericImageView};
    use ndarray::array;

    fn grid() -> TemperatureGrid {
        TemperatureGrid::new(array![[10., 20., 60.], [100., 120., 55.]])
    }

    #[test]
    fn scales_and_clamps() {
        let t = ScaleTransform::new(20., 100.).unwrap();
        assert_eq!(t.transform(20.), 0);
        assert_eq!(t.transform(100.), u16::MAX);
        assert_eq!(t.transform(10.), 0);
        assert_eq!(t.transform(500.), u16::MAX);
        assert_eq!(t.transform(60.), 32768);

        let [offset, slope] = t.inverse_coeffs();
        assert!((offset + slope * u16::MAX as f64 - 100.).abs() < 1e-9);
        assert!((offset - 20.).abs() < 1e-9);

        assert!(ScaleTransform::new(5., 5.).is_err());
    }

    #[test]
    fn writes_sixteen_bit_images() {
        let dir = tempfile::tempdir().unwrap();
        let t = ScaleTransform::new(20., 100.).unwrap();
        for name in &["out.tif", "out.png"] {
            let path = dir.path().join(name);
            t.write(&grid(), &path).unwrap();
            let decoded = image::open(&path).unwrap();
            assert_eq!(decoded.dimensions(), (3, 2));
            match decoded {
                DynamicImage::ImageLuma16(img) => {
                    assert_eq!(img.get_pixel(0, 0).0, [0]);
                    assert_eq!(img.get_pixel(2, 0).0, [32768]);
                    assert_eq!(img.get_pixel(0, 1).0, [u16::MAX]);
                }
                other => panic!("unexpected color type: {:?}", other.color()),
            }
        }
        assert!(t.write(&grid(), &dir.path().join("out.bmp")).is_err());
    }
}
