use crate::edit::EditError;
use crate::formats::IoError;
use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("segmentation failed: {0}")]
    Segmentation(String),

    #[error("raster layout error: {0}")]
    Core(#[from] CoreError),

    #[error("edit error: {0}")]
    Edit(#[from] EditError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}
