use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BrushState, Result, read_document};

pub const DEFAULT_TOLERANCE: f32 = 80.0;
pub const DEFAULT_HISTORY_DEPTH: usize = 10;
pub const MAX_HISTORY_DEPTH: usize = 100;
pub const GHOST_OPACITY: f32 = 0.3;
pub const SELECTION_OPACITY: f32 = 0.4;

/// Largest possible RGB distance; a tolerance above it marks every pixel.
const MAX_RGB_DISTANCE: f32 = 441.673;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub tolerance: f32,
    pub history_depth: usize,
    pub ghost_opacity: f32,
    pub selection_opacity: f32,
    pub brush: BrushState,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            history_depth: DEFAULT_HISTORY_DEPTH,
            ghost_opacity: GHOST_OPACITY,
            selection_opacity: SELECTION_OPACITY,
            brush: BrushState::default(),
        }
    }
}

impl EditorConfig {
    /// Clamps every field into its usable range. Non-finite values fall back
    /// to the defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let tolerance = if self.tolerance.is_finite() {
            self.tolerance.clamp(0.0, MAX_RGB_DISTANCE + 1.0)
        } else {
            defaults.tolerance
        };
        Self {
            tolerance,
            history_depth: self.history_depth.clamp(1, MAX_HISTORY_DEPTH),
            ghost_opacity: unit_or(self.ghost_opacity, defaults.ghost_opacity),
            selection_opacity: unit_or(self.selection_opacity, defaults.selection_opacity),
            brush: self.brush.sanitized(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = read_document(path.as_ref())?;
        Ok(config.sanitized())
    }
}

fn unit_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}
