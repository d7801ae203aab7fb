mod compositor;
mod error;
mod history;
mod resolver;
mod selection;


pub use compositor::{LayerOpacity, render, render_with};
pub use error::{EditError, Result};
pub use history::{HistoryEntry, HistoryManager};
pub use resolver::{ResolveOutcome, resolve};
pub use selection::{SelectionBuffer, paint_stroke};
