use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Grid position: (section, seat number within the section).
///
/// Ordering is lexicographic on (section, seat), which is also the order of
/// the compiled lists and of the persisted snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SeatKey {
    pub section: u32,
    pub seat: u32,
}

impl SeatKey {
    pub fn new(section: u32, seat: u32) -> Self {
        Self { section, seat }
    }

    /// Parse the raw section/seat cells of a roster row.
    /// Seat numbers start at 1.
    pub fn parse(section: &str, seat: &str) -> AppResult<Self> {
        let bad = || AppError::InvalidSeatKey(format!("{section}/{seat}"));
        let section = section.trim().parse::<u32>().map_err(|_| bad())?;
        let seat = seat.trim().parse::<u32>().map_err(|_| bad())?;
        if seat == 0 {
            return Err(bad());
        }
        Ok(Self { section, seat })
    }
}

impl fmt::Display for SeatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section {} seat {}", self.section, self.seat)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    pub key: SeatKey,
    pub name: Option<String>,        // empty seats exist
    pub affiliation: Option<String>, // dorm / house tag, drives the color class
    pub withdrawn: bool,             // student left for good
}

impl Seat {
    pub fn new(key: SeatKey, name: &str, affiliation: Option<&str>, withdrawn: bool) -> Self {
        let name = name.trim();
        Self {
            key,
            name: (!name.is_empty()).then(|| name.to_string()),
            affiliation: affiliation
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string),
            withdrawn,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.name.is_some()
    }

    /// Only occupied, non-withdrawn seats take attendance.
    pub fn is_interactable(&self) -> bool {
        self.is_occupied() && !self.withdrawn
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
