use std::path::{Path, PathBuf};

use image::{Pixel, RgbaImage};

use crate::formats::read_raster;
use crate::model::{ensure_nonempty, ensure_same_dimensions};

use super::{Result, SessionError};

/// Produces the foreground mask for an original image. This is the seam to
/// the background-removal model, which lives outside this crate.
pub trait Segmenter {
    fn segment(&self, original: &RgbaImage) -> Result<RgbaImage>;
}

/// Reads a mask the segmentation model already wrote to disk.
#[derive(Debug, Clone)]
pub struct MaskFileSegmenter {
    path: PathBuf,
}

impl MaskFileSegmenter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Segmenter for MaskFileSegmenter {
    fn segment(&self, original: &RgbaImage) -> Result<RgbaImage> {
        let mask = read_raster(&self.path).map_err(|error| {
            SessionError::Segmentation(format!("{}: {error}", self.path.display()))
        })?;
        ensure_same_dimensions(original, &mask)?;
        Ok(mask)
    }
}

/// Builds the initial edited raster: the original's color with alpha taken
/// from `mask`. A mask that carries any transparency contributes its alpha
/// channel; a fully opaque mask is read as grayscale coverage.
pub fn apply_mask(original: &RgbaImage, mask: &RgbaImage) -> Result<RgbaImage> {
    ensure_nonempty(original)?;
    ensure_same_dimensions(original, mask)?;

    let use_alpha = mask.pixels().any(|pixel| pixel.0[3] < 255);
    let mut edited = original.clone();
    for (target, coverage) in edited.pixels_mut().zip(mask.pixels()) {
        target.0[3] = if use_alpha {
            coverage.0[3]
        } else {
            coverage.to_luma().0[0]
        };
    }
    Ok(edited)
}
