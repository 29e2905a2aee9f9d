// src/export/json.rs

use crate::errors::AppResult;
use crate::export::{AttendanceExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON array of attendance records.
pub fn to_json(records: &[AttendanceExport]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub(crate) fn export_json(records: &[AttendanceExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = to_json(records)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
