use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(
        "raster dimension mismatch: expected {expected_width}x{expected_height}, found {found_width}x{found_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        found_width: u32,
        found_height: u32,
    },

    #[error("raster has zero area ({width}x{height})")]
    EmptyRaster { width: u32, height: u32 },

    #[error("unsupported document format `{0}` (expected .json, .yaml or .yml)")]
    UnsupportedDocument(String),

    #[error("document I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("document JSON failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("document YAML failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
}
