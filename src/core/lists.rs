//! Absent / on-leave lists derived from the attendance map.
//!
//! Pure projection: nothing here mutates the map.

use crate::core::session::AppState;
use crate::models::{AttendanceState, SeatKey};
use crate::ui::locale::Locale;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    Absent,
    OnLeave,
}

impl ListKind {
    pub fn state(&self) -> AttendanceState {
        match self {
            ListKind::Absent => AttendanceState::Absent,
            ListKind::OnLeave => AttendanceState::OnLeave,
        }
    }

    pub fn title(&self, locale: Locale) -> &'static str {
        match self {
            ListKind::Absent => locale.absent_title(),
            ListKind::OnLeave => locale.on_leave_title(),
        }
    }

    fn placeholder(&self, locale: Locale) -> &'static str {
        match self {
            ListKind::Absent => locale.absent_empty(),
            ListKind::OnLeave => locale.on_leave_empty(),
        }
    }

    fn clipboard_label(&self, locale: Locale) -> &'static str {
        match self {
            ListKind::Absent => locale.absent_clipboard_label(),
            ListKind::OnLeave => locale.on_leave_clipboard_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub key: SeatKey,
    pub name: String,
}

impl ListEntry {
    pub fn render(&self, locale: Locale) -> String {
        locale.list_entry(self.key.section, self.key.seat, &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceList {
    pub kind: ListKind,
    pub entries: Vec<ListEntry>,
}

impl AttendanceList {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Copy/export actions are only offered for non-empty lists.
    pub fn export_enabled(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Display lines; a single localized placeholder when empty.
    pub fn lines(&self, locale: Locale) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![self.kind.placeholder(locale).to_string()];
        }
        self.entries.iter().map(|e| e.render(locale)).collect()
    }

    /// Plain text for the clipboard: label and date, a blank line, then one
    /// entry per line. `None` for an empty list.
    pub fn clipboard_text(&self, locale: Locale, date: NaiveDate) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        let mut txt = format!(
            "{} ({}):\n\n",
            self.kind.clipboard_label(locale),
            locale.format_date(date)
        );
        for e in &self.entries {
            txt.push_str(&e.render(locale));
            txt.push('\n');
        }
        Some(txt.trim_end().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledLists {
    pub absent: AttendanceList,
    pub on_leave: AttendanceList,
}

impl CompiledLists {
    pub fn get(&self, kind: ListKind) -> &AttendanceList {
        match kind {
            ListKind::Absent => &self.absent,
            ListKind::OnLeave => &self.on_leave,
        }
    }
}

fn collect(state: &AppState, kind: ListKind) -> AttendanceList {
    let wanted = kind.state();
    // map iteration is already (section, seat) ordered
    let entries = state
        .attendance
        .iter()
        .filter(|(_, s)| *s == wanted)
        .map(|(key, _)| ListEntry {
            key,
            name: state
                .roster
                .get(&key)
                .map(|s| s.display_name().to_string())
                .unwrap_or_default(),
        })
        .collect();

    AttendanceList { kind, entries }
}

pub fn compile(state: &AppState) -> CompiledLists {
    CompiledLists {
        absent: collect(state, ListKind::Absent),
        on_leave: collect(state, ListKind::OnLeave),
    }
}
