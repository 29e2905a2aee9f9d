//! The attendance state map: one `AttendanceState` per interactable seat.

use crate::models::{AttendanceState, Roster, SeatKey};
use serde::Serialize;
use std::collections::BTreeMap;

/// Persistable form of a single seat's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotRecord {
    pub key: SeatKey,
    pub absent: bool,
    pub on_leave: bool,
}

/// The whole map at a point in time, in (section, seat) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub records: Vec<SnapshotRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceMap {
    states: BTreeMap<SeatKey, AttendanceState>,
}

impl AttendanceMap {
    /// Every interactable seat of `roster`, all Present.
    pub fn for_roster(roster: &Roster) -> Self {
        Self {
            states: roster
                .interactable_keys()
                .map(|k| (k, AttendanceState::Present))
                .collect(),
        }
    }

    /// Rebuild the map for `roster` from a stored snapshot.
    ///
    /// Records for seats that are gone, empty or withdrawn are dropped;
    /// tracked seats without a record stay Present.
    pub fn restore(roster: &Roster, snapshot: &Snapshot) -> Self {
        let mut map = Self::for_roster(roster);
        for rec in &snapshot.records {
            if let Some(state) = map.states.get_mut(&rec.key) {
                *state = AttendanceState::from_flags(rec.absent, rec.on_leave);
            }
        }
        map
    }

    pub fn is_tracked(&self, key: &SeatKey) -> bool {
        self.states.contains_key(key)
    }

    /// Current state; Present for any seat without a record.
    pub fn get(&self, key: &SeatKey) -> AttendanceState {
        self.states.get(key).copied().unwrap_or_default()
    }

    /// Advance one step in the cycle. `None` (and no change) for seats that
    /// are not tracked.
    pub fn cycle(&mut self, key: &SeatKey) -> Option<AttendanceState> {
        let state = self.states.get_mut(key)?;
        *state = state.next();
        Some(*state)
    }

    pub fn reset(&mut self) {
        for state in self.states.values_mut() {
            *state = AttendanceState::Present;
        }
    }

    /// Tracked seats in (section, seat) order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatKey, AttendanceState)> + '_ {
        self.states.iter().map(|(k, s)| (*k, *s))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn count(&self, state: AttendanceState) -> usize {
        self.states.values().filter(|s| **s == state).count()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            records: self
                .iter()
                .map(|(key, state)| {
                    let (absent, on_leave) = state.to_flags();
                    SnapshotRecord {
                        key,
                        absent,
                        on_leave,
                    }
                })
                .collect(),
        }
    }
}
