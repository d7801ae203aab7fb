use image::RgbaImage;

use super::{CoreError, Result};

pub fn ensure_nonempty(raster: &RgbaImage) -> Result<()> {
    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 {
        return Err(CoreError::EmptyRaster { width, height });
    }
    Ok(())
}

pub fn ensure_same_dimensions(expected: &RgbaImage, found: &RgbaImage) -> Result<()> {
    let (expected_width, expected_height) = expected.dimensions();
    let (found_width, found_height) = found.dimensions();
    if (expected_width, expected_height) != (found_width, found_height) {
        return Err(CoreError::DimensionMismatch {
            expected_width,
            expected_height,
            found_width,
            found_height,
        });
    }
    Ok(())
}

/// Number of pixels whose alpha is not zero.
pub fn visible_pixel_count(raster: &RgbaImage) -> usize {
    raster.pixels().filter(|pixel| pixel.0[3] != 0).count()
}

