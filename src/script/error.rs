use crate::model::CoreError;
use crate::session::SessionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScriptError>;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("stroke script parse failure: {0}")]
    Parse(String),

    #[error("stroke script document failure: {0}")]
    Document(#[from] CoreError),

    #[error("editing session failure: {0}")]
    Session(#[from] SessionError),
}
