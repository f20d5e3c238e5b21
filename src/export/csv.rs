use super::model::ExportRow;
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write rows as CSV with a header line.
pub(crate) fn write_csv<R: ExportRow>(path: &Path, rows: &[R]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(R::headers())?;
    for row in rows {
        wtr.write_record(row.cells())?;
    }

    wtr.flush()?;
    Ok(())
}
