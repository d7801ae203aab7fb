use image::RgbaImage;
use rayon::prelude::*;

use crate::model::{BrushMode, GHOST_OPACITY, SELECTION_OPACITY, ensure_same_dimensions};

use super::{Result, SelectionBuffer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerOpacity {
    pub ghost: f32,
    pub selection: f32,
}

impl Default for LayerOpacity {
    fn default() -> Self {
        Self {
            ghost: GHOST_OPACITY,
            selection: SELECTION_OPACITY,
        }
    }
}

/// Composites the visible frame with the default layer opacities.
pub fn render(
    original: &RgbaImage,
    edited: &RgbaImage,
    selection: &SelectionBuffer,
    brush_mode: BrushMode,
    stroke_active: bool,
) -> Result<RgbaImage> {
    render_with(
        original,
        edited,
        Some(selection).filter(|_| stroke_active),
        brush_mode,
        LayerOpacity::default(),
    )
}

/// Layer order, bottom to top:
/// 1. `original` at `opacity.ghost`, only in restore mode;
/// 2. `edited` at full opacity;
/// 3. `selection` at `opacity.selection`, when given.
///
/// Output starts fully transparent and is pure in its inputs.
pub fn render_with(
    original: &RgbaImage,
    edited: &RgbaImage,
    selection: Option<&SelectionBuffer>,
    brush_mode: BrushMode,
    opacity: LayerOpacity,
) -> Result<RgbaImage> {
    ensure_same_dimensions(original, edited)?;
    if let Some(selection) = selection {
        ensure_same_dimensions(original, selection.as_image())?;
    }

    let (width, height) = original.dimensions();
    let mut frame = RgbaImage::new(width, height);
    let row_len = width as usize * 4;
    if row_len == 0 {
        return Ok(frame);
    }

    let ghost = match brush_mode {
        BrushMode::Restore => Some(original.as_raw()),
        BrushMode::Erase => None,
    };
    let overlay = selection.map(|selection| selection.as_image().as_raw());

    frame
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, frame_row)| {
            let span = row * row_len..(row + 1) * row_len;
            if let Some(ghost) = ghost {
                blend_row(frame_row, &ghost[span.clone()], opacity.ghost);
            }
            blend_row(frame_row, &edited.as_raw()[span.clone()], 1.0);
            if let Some(overlay) = overlay {
                blend_row(frame_row, &overlay[span], opacity.selection);
            }
        });

    Ok(frame)
}

fn blend_row(destination: &mut [u8], source: &[u8], opacity: f32) {
    for (dst, src) in destination.chunks_exact_mut(4).zip(source.chunks_exact(4)) {
        blend_over(dst, src, opacity);
    }
}

/// Source-over with straight (non-premultiplied) alpha.
fn blend_over(dst: &mut [u8], src: &[u8], opacity: f32) {
    let src_alpha = f32::from(src[3]) / 255.0 * opacity;
    if src_alpha <= 0.0 {
        return;
    }
    let dst_alpha = f32::from(dst[3]) / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    for channel in 0..3 {
        let blended = (f32::from(src[channel]) * src_alpha
            + f32::from(dst[channel]) * dst_alpha * (1.0 - src_alpha))
            / out_alpha;
        dst[channel] = blended.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
}

#[cfg(test)]
mod tests {
    use super::blend_over;

    #[test]
    fn opaque_source_replaces_destination() {
        let mut dst = [10, 20, 30, 255];
        blend_over(&mut dst, &[200, 100, 50, 255], 1.0);
        assert_eq!(dst, [200, 100, 50, 255]);
    }

    #[test]
    fn transparent_source_leaves_destination() {
        let mut dst = [10, 20, 30, 128];
        blend_over(&mut dst, &[200, 100, 50, 0], 1.0);
        assert_eq!(dst, [10, 20, 30, 128]);
    }

    #[test]
    fn partial_opacity_over_empty_keeps_color() {
        let mut dst = [0, 0, 0, 0];
        blend_over(&mut dst, &[100, 150, 200, 255], 0.3);
        assert_eq!(dst, [100, 150, 200, 77]);
    }
}
