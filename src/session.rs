mod editor;
mod error;
mod segmentation;


pub use editor::{EditSession, StrokeOutcome};
pub use error::{Result, SessionError};
pub use segmentation::{MaskFileSegmenter, Segmenter, apply_mask};
