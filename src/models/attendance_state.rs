use serde::Serialize;

/// Attendance of one interactable seat for the current day.
///
/// Cycling order: Present → Absent → OnLeave → Present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AttendanceState {
    #[default]
    Present,
    Absent,
    OnLeave,
}

impl AttendanceState {
    pub fn next(self) -> Self {
        match self {
            AttendanceState::Present => AttendanceState::Absent,
            AttendanceState::Absent => AttendanceState::OnLeave,
            AttendanceState::OnLeave => AttendanceState::Present,
        }
    }

    /// Value of the `Status` column in the attendance export.
    pub fn export_label(&self) -> &'static str {
        match self {
            AttendanceState::Present => "Attend",
            AttendanceState::Absent => "Absent",
            AttendanceState::OnLeave => "Leave",
        }
    }

    pub fn from_export_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "attend" => Some(AttendanceState::Present),
            "absent" => Some(AttendanceState::Absent),
            "leave" => Some(AttendanceState::OnLeave),
            _ => None,
        }
    }

    /// Snapshot flags: (absent, on_leave).
    pub fn to_flags(self) -> (bool, bool) {
        (
            self == AttendanceState::Absent,
            self == AttendanceState::OnLeave,
        )
    }

    /// A record carrying both flags reads as Absent.
    pub fn from_flags(absent: bool, on_leave: bool) -> Self {
        match (absent, on_leave) {
            (true, _) => AttendanceState::Absent,
            (false, true) => AttendanceState::OnLeave,
            (false, false) => AttendanceState::Present,
        }
    }

    pub fn is_marked(&self) -> bool {
        !matches!(self, AttendanceState::Present)
    }
}
