use serde::{Deserialize, Serialize};

use crate::model::BrushMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepReport {
    pub op: String,
    pub committed: bool,
    pub marked: Option<usize>,
    pub affected: Option<usize>,
    pub history_len: usize,
    pub history_index: Option<usize>,
    pub zoom: f32,
    pub brush_size: u32,
    pub brush_mode: BrushMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptReport {
    pub script_name: Option<String>,
    pub steps: Vec<StepReport>,
    pub strokes_committed: usize,
    pub history_len: usize,
    pub history_index: Option<usize>,
    pub visible_pixels: usize,
}
