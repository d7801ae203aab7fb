use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{CoreError, Result};

/// Serialization formats for configuration, stroke scripts and run reports,
/// chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|value| value.to_str())
            .map(|value| value.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(CoreError::UnsupportedDocument(
                path.to_string_lossy().to_string(),
            )),
        }
    }

    pub fn parse<T: DeserializeOwned>(self, raw: &str) -> Result<T> {
        Ok(match self {
            Self::Json => serde_json::from_str(raw)?,
            Self::Yaml => serde_yaml::from_str(raw)?,
        })
    }

    pub fn render<T: Serialize>(self, value: &T) -> Result<String> {
        Ok(match self {
            Self::Json => serde_json::to_string_pretty(value)?,
            Self::Yaml => serde_yaml::to_string(value)?,
        })
    }
}

/// Reads `path` as JSON or YAML. The extension is checked before the file is
/// opened.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DocumentFormat::from_path(path)?;
    let raw = fs::read_to_string(path)?;
    format.parse(&raw)
}

/// Writes `value` to `path` as JSON or YAML. Nothing is written when the
/// extension is not recognised.
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let serialized = DocumentFormat::from_path(path)?.render(value)?;
    fs::write(path, serialized)?;
    Ok(())
}
