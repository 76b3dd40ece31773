use super::model::LayoutExport;
use crate::errors::AppResult;
use std::path::Path;

/// Write the whole layout as pretty-printed JSON.
pub(crate) fn write_json(path: &Path, layout: &LayoutExport) -> AppResult<()> {
    let json = serde_json::to_string_pretty(layout)?;
    std::fs::write(path, json)?;
    Ok(())
}
