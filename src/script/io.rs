use std::path::Path;

use crate::model::{read_document, write_document};

use super::{Result, ScriptReport, StrokeScript};

/// Loads and validates a stroke script from a `.json`, `.yaml` or `.yml`
/// file.
pub fn load_script(path: impl AsRef<Path>) -> Result<StrokeScript> {
    let script: StrokeScript = read_document(path.as_ref())?;
    script.validate()?;
    log::debug!(
        "loaded stroke script {} with {} step(s)",
        script.name.as_deref().unwrap_or("<unnamed>"),
        script.steps.len()
    );
    Ok(script)
}

pub fn save_report(path: impl AsRef<Path>, report: &ScriptReport) -> Result<()> {
    write_document(path.as_ref(), report)?;
    Ok(())
}
