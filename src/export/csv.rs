use super::model::{SegmentExport, get_headers, segment_to_row};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write one CSV row per segment.
pub(crate) fn write_csv(path: &Path, segments: &[SegmentExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for s in segments {
        wtr.write_record(segment_to_row(s))?;
    }

    wtr.flush()?;
    Ok(())
}
