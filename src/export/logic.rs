// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{build_layout_export, build_segment_exports};
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::{CalendarEvent, Layout};
use crate::ui::messages::warning;
use crate::utils::path::absolute_output_path;

/// High-level export of a computed layout.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `layout` to `file`.
    ///
    /// - `format`: csv (one row per segment) or json (whole layout)
    /// - `file`: absolute output path, `~/` is expanded
    /// - `force`: overwrite without asking
    pub fn export(
        layout: &Layout,
        events: &[CalendarEvent],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = absolute_output_path(file)?;
        ensure_writable(&path, force)?;

        if layout.segments.is_empty() {
            warning("No events in the visible range; exporting an empty layout.");
        }

        match format {
            ExportFormat::Csv => csv::write_csv(&path, &build_segment_exports(layout, events))?,
            ExportFormat::Json => json::write_json(&path, &build_layout_export(layout, events))?,
        }

        tracing::info!(
            format = format.as_str(),
            path = %path.display(),
            segments = layout.segments.len(),
            "layout exported"
        );
        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(())
    }
}
