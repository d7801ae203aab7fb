use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EditError>;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("invalid color tolerance: {0}")]
    InvalidTolerance(f32),

    #[error("raster layout error: {0}")]
    Core(#[from] CoreError),
}
