mod brush;
mod config;
mod document;
mod error;
mod raster;


pub use brush::{
    BRUSH_SIZE_STEP, BrushMode, BrushState, DEFAULT_BRUSH_SIZE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE,
    clamp_brush_size,
};
pub use config::{
    DEFAULT_HISTORY_DEPTH, DEFAULT_TOLERANCE, EditorConfig, GHOST_OPACITY, MAX_HISTORY_DEPTH,
    SELECTION_OPACITY,
};
pub use document::{DocumentFormat, read_document, write_document};
pub use error::{CoreError, Result};
pub use raster::{ensure_nonempty, ensure_same_dimensions, visible_pixel_count};
