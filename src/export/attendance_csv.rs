//! Attendance export: roster columns plus the day's `Status`.

use crate::errors::AppResult;
use crate::export::model::{ATTENDANCE_HEADERS, AttendanceExport};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the records as a quoted CSV table with a header row.
pub fn write_attendance<W: Write>(records: &[AttendanceExport], writer: W) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    wtr.write_record(ATTENDANCE_HEADERS)?;
    for rec in records {
        wtr.write_record(rec.to_row())?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_csv(records: &[AttendanceExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_attendance(records, file)?;

    notify_export_success("CSV", path);
    Ok(())
}
