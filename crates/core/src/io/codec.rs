//! Image file decoding and encoding
//!
//! Uses the `image` crate for format support. Every input is converted to
//! 8-bit luma on load, so color files are accepted but collapsed to a single
//! intensity channel.

use crate::error::{Error, Result};
use crate::raster::Raster;
use image::{DynamicImage, GrayImage};
use std::io::Cursor;
use std::path::Path;

pub use image::ImageFormat;

/// Options for writing image files
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    /// Output format. `None` infers it from the file extension.
    pub format: Option<ImageFormat>,
}

/// Read an image file into an 8-bit intensity raster
///
/// Fails with [`Error::Decode`] when the file cannot be opened or decoded.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Raster<u8>> {
    let path = path.as_ref();
    let image = image::open(path)
        .map_err(|e| Error::Decode(format!("{}: {}", path.display(), e)))?;
    from_dynamic(image)
}

/// Decode an in-memory image into an 8-bit intensity raster
///
/// Same as `read_image` but operates on a byte slice instead of a file path.
pub fn read_image_from_buffer(data: &[u8]) -> Result<Raster<u8>> {
    let image = image::load_from_memory(data).map_err(|e| Error::Decode(e.to_string()))?;
    from_dynamic(image)
}

/// Write an intensity raster to an image file
///
/// The format comes from `options.format`, or from the path extension when
/// no format is given. Fails with [`Error::Encode`] if encoding or writing fails.
pub fn write_image<P: AsRef<Path>>(
    raster: &Raster<u8>,
    path: P,
    options: Option<ImageOptions>,
) -> Result<()> {
    let path = path.as_ref();
    let image = to_gray_image(raster)?;
    let format = match options.and_then(|o| o.format) {
        Some(format) => format,
        None => ImageFormat::from_path(path)
            .map_err(|_| Error::UnsupportedFormat(path.display().to_string()))?,
    };
    image
        .save_with_format(path, format)
        .map_err(|e| Error::Encode(format!("{}: {}", path.display(), e)))
}

/// Encode an intensity raster into an in-memory image buffer
pub fn write_image_to_buffer(raster: &Raster<u8>, format: ImageFormat) -> Result<Vec<u8>> {
    let image = to_gray_image(raster)?;
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), format)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(buf)
}

fn from_dynamic(image: DynamicImage) -> Result<Raster<u8>> {
    let gray = image.into_luma8();
    let cols = gray.width() as usize;
    let rows = gray.height() as usize;
    Raster::from_vec(gray.into_raw(), rows, cols)
}

fn to_gray_image(raster: &Raster<u8>) -> Result<GrayImage> {
    let (rows, cols) = raster.shape();
    let data: Vec<u8> = raster.iter().copied().collect();
    GrayImage::from_raw(cols as u32, rows as u32, data).ok_or(Error::InvalidDimensions {
        width: cols,
        height: rows,
    })
}
