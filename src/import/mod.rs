// src/import/mod.rs

mod adapter;
mod record;

pub use adapter::{EventStats, ImportReport, SkipReason, Skipped, adapt_records};
pub use record::SourceRecord;

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
    Csv,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            _ => Err(AppError::UnsupportedInput(format!(
                "{} (expected .json, .yaml, .yml or .csv)",
                path.display()
            ))),
        }
    }
}

/// Parse raw records from `content` in the given format.
pub fn parse_records(content: &str, format: SourceFormat) -> AppResult<Vec<SourceRecord>> {
    let records: Vec<SourceRecord> = match format {
        SourceFormat::Json => serde_json::from_str(content)?,
        SourceFormat::Yaml => serde_yaml::from_str::<Option<Vec<SourceRecord>>>(content)?
            .unwrap_or_default(),
        SourceFormat::Csv => {
            let mut rdr = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(content.as_bytes());
            rdr.deserialize().collect::<Result<Vec<SourceRecord>, _>>()?
        }
    };
    Ok(records)
}

/// Read and adapt the events source at `path`.
pub fn load_events(path: &Path) -> AppResult<ImportReport> {
    let format = SourceFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("cannot read events file {}: {e}", path.display()),
        ))
    })?;

    tracing::debug!(path = %path.display(), ?format, "loading events");
    adapt_records(parse_records(&content, format)?)
}
