// src/export/model.rs

use crate::core::session::AppState;
use serde::{Deserialize, Serialize};

/// Column headers of the roster source (and of the admin download).
pub const ROSTER_HEADERS: [&str; 5] = ["Class", "Seat", "Name", "School", "Left"];

/// Attendance export header. Every column re-imports as a roster alias.
pub const ATTENDANCE_HEADERS: [&str; 6] = [
    "Row/Class",
    "Seat",
    "Name",
    "Dorm",
    "Left",
    "Status",
];

/// Flat record for the attendance export, one per occupied seat.
///
/// `status` is empty for withdrawn seats, which take no attendance.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AttendanceExport {
    pub section: u32,
    pub seat: u32,
    pub name: String,
    pub affiliation: String,
    pub withdrawn: bool,
    pub status: String,
}

impl AttendanceExport {
    pub(crate) fn to_row(&self) -> [String; 6] {
        [
            self.section.to_string(),
            self.seat.to_string(),
            self.name.clone(),
            self.affiliation.clone(),
            self.withdrawn.to_string(),
            self.status.clone(),
        ]
    }
}

/// Collect export records from the current state, in (section, seat) order.
pub fn build_records(state: &AppState) -> Vec<AttendanceExport> {
    state
        .roster
        .occupied()
        .map(|seat| AttendanceExport {
            section: seat.key.section,
            seat: seat.key.seat,
            name: seat.display_name().to_string(),
            affiliation: seat.affiliation.clone().unwrap_or_default(),
            withdrawn: seat.withdrawn,
            status: if seat.withdrawn {
                String::new()
            } else {
                state.attendance.get(&seat.key).export_label().to_string()
            },
        })
        .collect()
}
