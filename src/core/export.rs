use crate::core::lists::{AttendanceList, ListKind};
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::attendance_csv::export_csv;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json::export_json;
use crate::export::model::build_records;
use crate::export::notify_export_success;
use crate::export::roster_csv::write_roster;
use crate::ui::locale::Locale;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::fs::File;
use std::path::Path;

/// High level export operations driven by the CLI.
pub struct ExportLogic;

impl ExportLogic {
    /// Attendance export of every occupied seat.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    pub fn export(
        session: &Session,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        check_absolute(path)?;
        ensure_writable(path, force)?;
        ensure_parent(path)?;

        let records = build_records(session.state());
        if records.is_empty() {
            warning("Roster is empty, nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
        }

        session.log(
            "export",
            &path.to_string_lossy(),
            &format!("{} rows exported as {}", records.len(), format.as_str()),
        );
        Ok(())
    }

    /// Roster in its source format, for editing and re-import.
    pub fn export_roster(session: &Session, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);
        check_absolute(path)?;
        ensure_writable(path, force)?;
        ensure_parent(path)?;

        let out = File::create(path)?;
        write_roster(&session.state().roster, out)?;
        notify_export_success("Roster", path);

        session.log("roster_export", &path.to_string_lossy(), "Roster written");
        Ok(())
    }

    /// Clipboard text of one list; `None` when the list is empty (the copy
    /// action is disabled).
    pub fn copy_text(
        list: &AttendanceList,
        locale: Locale,
        date: NaiveDate,
    ) -> Option<String> {
        list.export_enabled()
            .then(|| list.clipboard_text(locale, date))
            .flatten()
    }

    /// Write the clipboard text of `kind` to `file`.
    pub fn copy_to_file(
        session: &Session,
        kind: ListKind,
        locale: Locale,
        date: NaiveDate,
        file: &str,
        force: bool,
    ) -> AppResult<bool> {
        let path = Path::new(file);
        check_absolute(path)?;

        let Some(text) = Self::copy_text(session.lists().get(kind), locale, date) else {
            return Ok(false);
        };

        ensure_writable(path, force)?;
        ensure_parent(path)?;
        std::fs::write(path, format!("{text}\n"))?;
        notify_export_success(kind.title(locale), path);
        Ok(true)
    }
}

fn check_absolute(path: &Path) -> AppResult<()> {
    if path.is_absolute() {
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "output file path must be absolute: {}",
            path.display()
        )))
    }
}
