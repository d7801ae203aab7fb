use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::model::ensure_nonempty;

use super::Result;

pub(crate) fn read_common_raster(path: &Path) -> Result<RgbaImage> {
    let raster = image::open(path)?.to_rgba8();
    ensure_nonempty(&raster)?;
    Ok(raster)
}

pub(crate) fn decode_common_raster(bytes: &[u8]) -> Result<RgbaImage> {
    let raster = image::load_from_memory(bytes)?.to_rgba8();
    ensure_nonempty(&raster)?;
    Ok(raster)
}

pub(crate) fn write_png(path: &Path, raster: &RgbaImage) -> Result<()> {
    raster.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

pub(crate) fn encode_png_bytes(raster: &RgbaImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    raster.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}
