//! Image decoding collaborator: files to RGBA buffers
//!
//! Decode and fetch failures are handled here, before analysis; the
//! analysis core only ever sees fully decoded buffers.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error while loading an image from disk.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// File could not be opened or decoded as an image
    #[error("failed to decode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A decoded image as a flat RGBA byte buffer, row-major.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub buffer: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Load an image file and rasterize it to RGBA8.
///
/// # Errors
///
/// Returns `DecodeError` when the file cannot be read or is not a
/// supported image format.
pub fn load_rgba(path: &Path) -> Result<DecodedImage, DecodeError> {
    let img = image::open(path)
        .map_err(|source| DecodeError::Image { path: path.to_path_buf(), source })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage { buffer: rgba.into_raw(), width, height })
}
