use egui::Pos2;
use image::{Rgba, RgbaImage};

use crate::model::BrushMode;

/// Transient per-stroke mask. A pixel is marked when its alpha is nonzero.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionBuffer {
    mask: RgbaImage,
}

impl SelectionBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            mask: RgbaImage::new(width, height),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.mask.dimensions()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.mask
    }

    pub fn is_marked(&self, x: u32, y: u32) -> bool {
        self.mask
            .get_pixel_checked(x, y)
            .is_some_and(|pixel| pixel.0[3] != 0)
    }

    pub fn marked_count(&self) -> usize {
        self.mask.pixels().filter(|pixel| pixel.0[3] != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.mask.pixels().all(|pixel| pixel.0[3] == 0)
    }

    pub fn clear(&mut self) {
        for pixel in self.mask.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }
}

/// Stamps a filled disc of diameter `brush_size` centered at `point` (raster
/// space) into `selection`. Stamps accumulate until the buffer is cleared.
/// Pixels are covered when their center lies inside the disc; the part of
/// the disc outside the raster is dropped. Returns the number of pixels
/// newly marked by this stamp.
pub fn paint_stroke(
    selection: &mut SelectionBuffer,
    point: Pos2,
    brush_size: u32,
    brush_mode: BrushMode,
) -> usize {
    let (width, height) = selection.dimensions();
    if width == 0 || height == 0 || brush_size == 0 || !point.x.is_finite() || !point.y.is_finite()
    {
        return 0;
    }

    let radius = brush_size as f32 / 2.0;
    let radius_sq = radius * radius;
    let min_x = (point.x - radius).floor().max(0.0);
    let min_y = (point.y - radius).floor().max(0.0);
    let max_x = (point.x + radius).ceil().min(width as f32);
    let max_y = (point.y + radius).ceil().min(height as f32);
    if min_x >= max_x || min_y >= max_y {
        return 0;
    }

    let marker = Rgba(brush_mode.marker());
    let mut newly_marked = 0;
    for y in min_y as u32..max_y as u32 {
        let dy = y as f32 + 0.5 - point.y;
        for x in min_x as u32..max_x as u32 {
            let dx = x as f32 + 0.5 - point.x;
            if dx * dx + dy * dy > radius_sq {
                continue;
            }
            let pixel = selection.mask.get_pixel_mut(x, y);
            if pixel.0[3] == 0 {
                newly_marked += 1;
            }
            *pixel = marker;
        }
    }
    newly_marked
}
