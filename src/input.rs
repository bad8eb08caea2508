use std::path::{Path, PathBuf};

use image::{io::Reader, RgbImage};
use tracing::debug;

use crate::error::InputError;

/// A decoded image together with the path it came from.
#[derive(Debug)]
pub struct ImageInput {
    pub path: PathBuf,
    pub image: RgbImage,
}

impl ImageInput {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        let image = load_rgb(path)?;
        Ok(ImageInput {
            path: path.into(),
            image,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Read and decode any raster format supported by `image`
/// into 8-bit RGB. The format is guessed from the content.
pub fn load_rgb(path: &Path) -> Result<RgbImage, InputError> {
    let open_err = |source| InputError::Open {
        path: path.into(),
        source,
    };
    let image = Reader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?
        .decode()
        .map_err(|source| InputError::Decode {
            path: path.into(),
            source,
        })?
        .to_rgb8();

    let (wid, ht) = image.dimensions();
    debug!(path = %path.display(), width = wid, height = ht, "decoded image");
    Ok(image)
}
