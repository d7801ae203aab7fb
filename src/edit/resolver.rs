use image::RgbaImage;
use rayon::prelude::*;
use serde::Serialize;

use crate::model::{BrushMode, ensure_same_dimensions};

use super::{EditError, Result, SelectionBuffer};

/// Summary of one resolved stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolveOutcome {
    pub mode: BrushMode,
    /// Pixels covered by the stroke.
    pub marked: usize,
    /// Marked pixels within tolerance of the stroke's mean color.
    pub affected: usize,
    pub mean_rgb: [f64; 3],
}

#[derive(Debug, Clone, Copy, Default)]
struct ColorSum {
    channels: [u64; 3],
    count: usize,
}

impl ColorSum {
    fn merge(self, other: Self) -> Self {
        Self {
            channels: [
                self.channels[0] + other.channels[0],
                self.channels[1] + other.channels[1],
                self.channels[2] + other.channels[2],
            ],
            count: self.count + other.count,
        }
    }
}

/// Turns the coarse stroke in `selection` into a precise edit of `edited`.
///
/// The mean RGB of `original` under the stroke is the reference color; every
/// marked pixel whose original color lies strictly closer than `tolerance`
/// (Euclidean RGB distance) is erased or restored depending on `brush_mode`.
/// Everything else is left bit-identical. The selection is cleared
/// afterwards. Returns `None` when the stroke marked nothing.
///
/// Rows are processed in parallel; channel sums are integers so the result
/// does not depend on how rows are scheduled.
pub fn resolve(
    original: &RgbaImage,
    edited: &mut RgbaImage,
    selection: &mut SelectionBuffer,
    brush_mode: BrushMode,
    tolerance: f32,
) -> Result<Option<ResolveOutcome>> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(EditError::InvalidTolerance(tolerance));
    }
    ensure_same_dimensions(original, edited)?;
    ensure_same_dimensions(original, selection.as_image())?;

    let row_len = original.width() as usize * 4;
    if row_len == 0 {
        return Ok(None);
    }

    let sum = selection
        .as_image()
        .as_raw()
        .par_chunks(row_len)
        .zip(original.as_raw().par_chunks(row_len))
        .map(|(selection_row, original_row)| {
            let mut sum = ColorSum::default();
            for (marker, color) in selection_row
                .chunks_exact(4)
                .zip(original_row.chunks_exact(4))
            {
                if marker[3] == 0 {
                    continue;
                }
                sum.channels[0] += u64::from(color[0]);
                sum.channels[1] += u64::from(color[1]);
                sum.channels[2] += u64::from(color[2]);
                sum.count += 1;
            }
            sum
        })
        .reduce(ColorSum::default, ColorSum::merge);

    if sum.count == 0 {
        selection.clear();
        return Ok(None);
    }

    let count = sum.count as f64;
    let mean_rgb = [
        sum.channels[0] as f64 / count,
        sum.channels[1] as f64 / count,
        sum.channels[2] as f64 / count,
    ];
    let tolerance_sq = f64::from(tolerance) * f64::from(tolerance);

    let selection_raw = selection.as_image().as_raw();
    let original_raw = original.as_raw();
    let affected = edited
        .par_chunks_mut(row_len)
        .zip(selection_raw.par_chunks(row_len))
        .zip(original_raw.par_chunks(row_len))
        .map(|((edited_row, selection_row), original_row)| {
            let mut affected = 0;
            for ((target, marker), color) in edited_row
                .chunks_exact_mut(4)
                .zip(selection_row.chunks_exact(4))
                .zip(original_row.chunks_exact(4))
            {
                if marker[3] == 0 || distance_sq(color, &mean_rgb) >= tolerance_sq {
                    continue;
                }
                match brush_mode {
                    BrushMode::Erase => target[3] = 0,
                    BrushMode::Restore => {
                        target[..3].copy_from_slice(&color[..3]);
                        target[3] = 255;
                    }
                }
                affected += 1;
            }
            affected
        })
        .sum::<usize>();

    selection.clear();

    log::debug!(
        "resolved {} stroke: {} marked, {} within tolerance {tolerance} of mean {:?}",
        brush_mode.label(),
        sum.count,
        affected,
        mean_rgb
    );

    Ok(Some(ResolveOutcome {
        mode: brush_mode,
        marked: sum.count,
        affected,
        mean_rgb,
    }))
}

fn distance_sq(color: &[u8], mean: &[f64; 3]) -> f64 {
    color[..3]
        .iter()
        .zip(mean)
        .map(|(channel, mean)| {
            let delta = f64::from(*channel) - mean;
            delta * delta
        })
        .sum()
}
