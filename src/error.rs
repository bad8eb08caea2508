use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("reference image is empty: width={0}, height={1}")]
    EmptyReference(u32, u32),

    #[error("invalid temperature bounds: min={0}, max={1} (need finite min < max)")]
    InvalidBounds(f64, f64),

    #[error("legend region {region} does not fit in a {width}x{height} image")]
    RegionOutOfBounds {
        region: String,
        width: u32,
        height: u32,
    },

    #[error("colour bar and temperature scale differ in length: {0} != {1}")]
    LengthMismatch(usize, usize),

    #[error("colour bar is empty")]
    EmptyColorBar,
}

#[derive(Error, Debug)]
pub enum MapError {
    #[error("target image is empty: width={0}, height={1}")]
    EmptyImage(u32, u32),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("unable to open image {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to decode image {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unable to read settings from {path:?}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
