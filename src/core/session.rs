//! The single controller of an attendance session.
//!
//! `Session` owns the application state (roster + attendance map), the
//! database handle and the derived lists. Every mutation is one synchronous
//! step: transition, persist, recompute.

use crate::core::attendance::AttendanceMap;
use crate::core::grid::GridView;
use crate::core::lists::{self, CompiledLists};
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::snapshot;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceState, Roster, SeatKey};

/// Application state read by the grid renderer and the list compiler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub roster: Roster,
    pub attendance: AttendanceMap,
}

impl AppState {
    /// Fresh state for `roster`, everybody Present.
    pub fn new(roster: Roster) -> Self {
        let attendance = AttendanceMap::for_roster(&roster);
        Self { roster, attendance }
    }
}

pub struct Session {
    state: AppState,
    lists: CompiledLists,
    pool: DbPool,
}

impl Session {
    /// Start a session on `roster`, reconciling whatever snapshot `pool`
    /// holds. A missing snapshot means everybody is Present.
    pub fn open(pool: DbPool, roster: Roster) -> AppResult<Self> {
        init_db(&pool.conn)?;
        let attendance = match snapshot::load(&pool.conn)? {
            Some(snap) => AttendanceMap::restore(&roster, &snap),
            None => AttendanceMap::for_roster(&roster),
        };
        let state = AppState { roster, attendance };
        let lists = lists::compile(&state);

        Ok(Self { state, lists, pool })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn lists(&self) -> &CompiledLists {
        &self.lists
    }

    pub fn grid(&self) -> GridView {
        GridView::build(&self.state)
    }

    pub fn get(&self, key: &SeatKey) -> AttendanceState {
        self.state.attendance.get(key)
    }

    /// One click on a seat. Seats that take no attendance are rejected
    /// before anything is touched.
    pub fn cycle(&mut self, key: SeatKey) -> AppResult<AttendanceState> {
        let seat = self
            .state
            .roster
            .get(&key)
            .ok_or(AppError::UnknownSeat(key))?;
        if !seat.is_interactable() {
            return Err(AppError::SeatNotInteractable(key));
        }
        let name = seat.display_name().to_string();

        let new_state = self
            .state
            .attendance
            .cycle(&key)
            .ok_or(AppError::SeatNotInteractable(key))?;

        self.commit()?;
        self.log(
            "mark",
            &format!("{}/{}", key.section, key.seat),
            &format!("{name} -> {}", new_state.export_label()),
        );

        Ok(new_state)
    }

    /// Everybody back to Present.
    pub fn reset(&mut self) -> AppResult<()> {
        self.state.attendance.reset();
        self.commit()?;
        self.log("reset", "", "All seats reset to present");
        Ok(())
    }

    /// Persist the full snapshot, then recompute the lists.
    fn commit(&mut self) -> AppResult<()> {
        let snap = self.state.attendance.snapshot();
        snapshot::save(&mut self.pool.conn, &snap)?;
        self.lists = lists::compile(&self.state);
        Ok(())
    }

    /// Internal log line; failures here never abort the operation.
    pub fn log(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            crate::ui::messages::warning(format!("Failed to write internal log: {e}"));
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
