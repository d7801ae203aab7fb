use serde::{Deserialize, Serialize};

use crate::model::BrushMode;

use super::{Result, ScriptError};

/// A recorded editing session: brush strokes and navigation, replayed
/// through the input controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrokeScript {
    pub name: Option<String>,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Drag through `points`, given in raster coordinates.
    Stroke {
        points: Vec<[f32; 2]>,
        #[serde(default)]
        mode: Option<BrushMode>,
        #[serde(default)]
        size: Option<u32>,
    },
    Undo,
    Redo,
    Mode {
        mode: BrushMode,
    },
    Size {
        size: u32,
    },
    /// Wheel ticks with the zoom modifier held; negative zooms out.
    Zoom {
        steps: i32,
    },
    /// Middle-button drag by a display-space offset.
    Pan {
        dx: f32,
        dy: f32,
    },
}

impl ScriptStep {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stroke { .. } => "stroke",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Mode { .. } => "mode",
            Self::Size { .. } => "size",
            Self::Zoom { .. } => "zoom",
            Self::Pan { .. } => "pan",
        }
    }
}

impl StrokeScript {
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(ScriptError::Parse(
                "script must include at least one step".to_string(),
            ));
        }
        for (index, step) in self.steps.iter().enumerate() {
            match step {
                ScriptStep::Stroke { points, .. } => {
                    if points.is_empty() {
                        return Err(ScriptError::Parse(format!(
                            "stroke at index {index} has no points"
                        )));
                    }
                    if points.iter().flatten().any(|value| !value.is_finite()) {
                        return Err(ScriptError::Parse(format!(
                            "stroke at index {index} has a non-finite coordinate"
                        )));
                    }
                }
                ScriptStep::Pan { dx, dy } if !dx.is_finite() || !dy.is_finite() => {
                    return Err(ScriptError::Parse(format!(
                        "pan at index {index} has a non-finite offset"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
