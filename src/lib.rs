//! Library to estimate temperatures from false-colour
//! thermal images.
//!
//! Many thermal cameras only export a rendered image: the
//! temperatures are encoded as colours, with a colour bar
//! (legend) showing the range. This crate inverts that
//! rendering.
//!
//! 1. [Calibrate](calibration::LookupTable::from_reference):
//! sample the colour bar, one colour per row along its
//! middle column, and pair the rows with temperatures evenly
//! spaced over a configured range.
//!
//! 2. [Map](mapper::map_image) every pixel of a target
//! image to the temperature of the closest colour bar entry
//! (euclidean distance in [HSV](color::Hsv), earliest entry
//! on ties).
//!
//! # Usage
//!
//! ```rust
//! # fn test_compile() -> anyhow::Result<()> {
//! use thermal_legend::{input::load_rgb, LookupTable, TemperatureBounds};
//!
//! let legend = load_rgb("legend.png".as_ref())?;
//! let frame = load_rgb("frame.jpg".as_ref())?;
//!
//! let table = LookupTable::from_reference(&legend, TemperatureBounds::new(20., 100.)?)?;
//! let grid = thermal_legend::map_image(&frame, &table)?;
//! println!("{}", thermal_legend::grid::readout(grid.at(10, 20).unwrap_or(f64::NAN)));
//! # Ok(())
//! # }
//! ```
//!
//! When the legend is part of the frame itself, crop it
//! with a [`LegendRegion`] via
//! [`from_legend`][LookupTable::from_legend].
//!
//! The [`TemperatureGrid`] can be queried by pixel position,
//! summarised into [`stats::Stats`], written as CSV, or
//! exported as a 16-bit image through [`export`].

pub mod calibration;
pub mod color;
pub mod error;
pub mod export;
pub mod grid;
pub mod input;
pub mod mapper;
pub mod settings;
pub mod stats;

pub mod cli;

pub use crate::calibration::LookupTable;
pub use crate::grid::TemperatureGrid;
pub use crate::mapper::{map_image, map_image_par};
pub use crate::settings::{LegendRegion, Settings, TemperatureBounds};
