pub mod attendance_state;
pub mod roster;
pub mod seat;

pub use attendance_state::AttendanceState;
pub use roster::Roster;
pub use seat::{Seat, SeatKey};
