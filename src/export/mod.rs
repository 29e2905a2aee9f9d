// src/export/mod.rs

pub mod attendance_csv;
pub(crate) mod fs_utils;
pub mod json;
pub mod model;
pub mod roster_csv;

pub use model::AttendanceExport;
pub use roster_csv::{DroppedRow, RosterImport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
