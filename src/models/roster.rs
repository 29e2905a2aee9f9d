use super::seat::{Seat, SeatKey};
use std::collections::BTreeMap;

/// Seat assignments for the whole building, keyed and ordered by `SeatKey`.
///
/// Built once per session by the roster importer; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    seats: BTreeMap<SeatKey, Seat>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the seat at `seat.key`. Unoccupied seats are not stored.
    pub fn insert(&mut self, seat: Seat) {
        if seat.is_occupied() {
            self.seats.insert(seat.key, seat);
        }
    }

    pub fn get(&self, key: &SeatKey) -> Option<&Seat> {
        self.seats.get(key)
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Occupied seats in (section, seat) order.
    pub fn occupied(&self) -> impl Iterator<Item = &Seat> {
        self.seats.values()
    }

    pub fn interactable_keys(&self) -> impl Iterator<Item = SeatKey> + '_ {
        self.seats
            .values()
            .filter(|s| s.is_interactable())
            .map(|s| s.key)
    }

    /// Distinct section numbers, ascending.
    pub fn sections(&self) -> Vec<u32> {
        let mut out: Vec<u32> = self.seats.keys().map(|k| k.section).collect();
        out.dedup();
        out
    }

    /// Highest assigned seat number in `section` (0 if the section is unknown).
    pub fn max_seat(&self, section: u32) -> u32 {
        self.seats
            .range(SeatKey::new(section, 0)..=SeatKey::new(section, u32::MAX))
            .next_back()
            .map(|(k, _)| k.seat)
            .unwrap_or(0)
    }

    pub fn withdrawn_count(&self) -> usize {
        self.seats.values().filter(|s| s.withdrawn).count()
    }
}
