use std::path::Path;

use image::RgbaImage;

use super::raster::{decode_common_raster, encode_png_bytes, read_common_raster, write_png};
use super::util::extension;
use super::{IoError, Result};

/// Decodes any supported image file into an RGBA raster.
pub fn read_raster(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let extension = extension(path)?;
    if !supported_formats().contains(&extension.as_str()) {
        return Err(IoError::UnsupportedFormat(extension));
    }
    read_common_raster(path)
}

/// Decodes an in-memory encoded image, sniffing the format from its header.
pub fn decode_raster(bytes: &[u8]) -> Result<RgbaImage> {
    decode_common_raster(bytes)
}

/// Writes `raster` as PNG; other extensions are rejected since they would
/// drop the mask's alpha channel.
pub fn write_raster(path: impl AsRef<Path>, raster: &RgbaImage) -> Result<()> {
    let path = path.as_ref();
    let extension = extension(path)?;
    match extension.as_str() {
        "png" => write_png(path, raster),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

pub fn encode_png(raster: &RgbaImage) -> Result<Vec<u8>> {
    encode_png_bytes(raster)
}

pub fn supported_formats() -> &'static [&'static str] {
    &["png", "jpg", "jpeg", "bmp", "webp"]
}
