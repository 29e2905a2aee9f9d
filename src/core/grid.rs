//! Seat grid: projection of roster + attendance map into per-section cells,
//! and its terminal rendering.

use crate::core::session::AppState;
use crate::models::{AttendanceState, SeatKey};
use crate::ui::locale::Locale;
use crate::utils::colors::{BOLD, CYAN, GREEN, GREY, INVERSE, RED, RESET, WHITE, YELLOW};
use crate::utils::text::{center_visible, pad_visible, truncate_to_width};
use serde::Serialize;

/// Color class of a cell, looked up from the student's affiliation tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorClass {
    Sky,
    Teal,
    Default,
}

/// Known dormitories. Anything else, or no tag, gets `ColorClass::Default`.
const AFFILIATION_COLORS: &[(&str, ColorClass)] =
    &[("လှ", ColorClass::Sky), ("သိမ်", ColorClass::Teal)];

impl ColorClass {
    pub fn for_affiliation(tag: Option<&str>) -> Self {
        tag.and_then(|t| {
            AFFILIATION_COLORS
                .iter()
                .find(|(name, _)| *name == t.trim())
                .map(|(_, c)| *c)
        })
        .unwrap_or(ColorClass::Default)
    }

    pub fn ansi(&self) -> &'static str {
        match self {
            ColorClass::Sky => CYAN,
            ColorClass::Teal => GREEN,
            ColorClass::Default => WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Cell {
    /// Seat number inside 1..=max with nobody assigned.
    Empty { seat: u32 },
    Withdrawn {
        seat: u32,
        name: String,
        affiliation: Option<String>,
        color: ColorClass,
    },
    Student {
        key: SeatKey,
        name: String,
        affiliation: Option<String>,
        color: ColorClass,
        state: AttendanceState,
    },
}

impl Cell {
    pub fn seat_number(&self) -> u32 {
        match self {
            Cell::Empty { seat } | Cell::Withdrawn { seat, .. } => *seat,
            Cell::Student { key, .. } => key.seat,
        }
    }

    /// Only student cells react to clicks (attendance cycling).
    pub fn is_interactable(&self) -> bool {
        matches!(self, Cell::Student { .. })
    }

    /// Hover text: the student's display name, for interactable cells only.
    pub fn tooltip(&self) -> Option<&str> {
        match self {
            Cell::Student { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn state(&self) -> Option<AttendanceState> {
        match self {
            Cell::Student { state, .. } => Some(*state),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub section: u32,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub sections: Vec<SectionView>,
}

impl GridView {
    /// Sections ascending; in each, seats 1..=max assigned seat. Gaps become
    /// `Cell::Empty`.
    pub fn build(state: &AppState) -> Self {
        let roster = &state.roster;
        let sections = roster
            .sections()
            .into_iter()
            .map(|section| {
                let cells = (1..=roster.max_seat(section))
                    .map(|n| {
                        let key = SeatKey::new(section, n);
                        match roster.get(&key) {
                            None => Cell::Empty { seat: n },
                            Some(s) => {
                                let color = ColorClass::for_affiliation(s.affiliation.as_deref());
                                if s.withdrawn {
                                    Cell::Withdrawn {
                                        seat: n,
                                        name: s.display_name().to_string(),
                                        affiliation: s.affiliation.clone(),
                                        color,
                                    }
                                } else {
                                    Cell::Student {
                                        key,
                                        name: s.display_name().to_string(),
                                        affiliation: s.affiliation.clone(),
                                        color,
                                        state: state.attendance.get(&key),
                                    }
                                }
                            }
                        }
                    })
                    .collect();
                SectionView { section, cells }
            })
            .collect();

        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, section: u32) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// Look up the cell at `key`, if it lies inside its section's range.
    pub fn cell(&self, key: &SeatKey) -> Option<&Cell> {
        self.section(key.section)?
            .cells
            .get((key.seat as usize).checked_sub(1)?)
    }
}

// ---------------------------
// Terminal rendering
// ---------------------------

const CELL_WIDTH: usize = 14;
const CELL_LINES: usize = 4;

fn state_marker(state: AttendanceState) -> (&'static str, &'static str) {
    match state {
        AttendanceState::Present => ("", RESET),
        AttendanceState::Absent => ("[A]", RED),
        AttendanceState::OnLeave => ("[L]", YELLOW),
    }
}

fn name_lines(name: &str) -> Vec<String> {
    let wrapped = textwrap::wrap(name, CELL_WIDTH);
    let mut out: Vec<String> = wrapped.iter().take(2).map(|l| l.to_string()).collect();
    if wrapped.len() > 2
        && let Some(last) = out.last_mut()
    {
        *last = truncate_to_width(&format!("{last} …"), CELL_WIDTH);
    }
    out.resize(2, String::new());
    out
}

/// Content lines of one cell, each exactly CELL_WIDTH columns wide.
fn cell_lines(cell: &Cell, locale: Locale) -> Vec<String> {
    let mut lines: Vec<String> = match cell {
        Cell::Empty { seat } => {
            let number = center_visible(&seat.to_string(), CELL_WIDTH);
            let mut v = vec![format!("{GREY}{number}{RESET}")];
            v.resize(CELL_LINES, String::new());
            v
        }
        Cell::Withdrawn {
            seat,
            name,
            affiliation,
            ..
        } => {
            let mut v = vec![format!("{GREY}{BOLD}{seat}{RESET}")];
            v.extend(
                name_lines(name)
                    .into_iter()
                    .map(|l| format!("{GREY}{l}{RESET}")),
            );
            let tag = affiliation.as_deref().unwrap_or("");
            let marker = locale.withdrawn_marker();
            let footer = truncate_to_width(format!("{tag} {marker}").trim(), CELL_WIDTH);
            v.push(format!("{RED}{footer}{RESET}"));
            v
        }
        Cell::Student {
            key,
            name,
            affiliation,
            color,
            state,
        } => {
            let (marker, marker_color) = state_marker(*state);
            let head = if state.is_marked() {
                format!(
                    "{BOLD}{}{RESET} {marker_color}{INVERSE}{marker}{RESET}",
                    key.seat
                )
            } else {
                format!("{BOLD}{}{RESET}", key.seat)
            };
            let mut v = vec![head];
            let c = color.ansi();
            v.extend(name_lines(name).into_iter().map(|l| format!("{c}{l}{RESET}")));
            let tag = truncate_to_width(affiliation.as_deref().unwrap_or(""), CELL_WIDTH);
            v.push(format!("{GREY}{tag}{RESET}"));
            v
        }
    };

    lines.truncate(CELL_LINES);
    lines.iter().map(|l| pad_visible(l, CELL_WIDTH)).collect()
}

/// Draw the grid as boxed cells, `columns` per row, one block per section.
pub fn render(view: &GridView, locale: Locale, columns: usize) -> String {
    let columns = columns.max(1);
    let border = "─".repeat(CELL_WIDTH + 2);
    let mut out = String::new();

    for section in &view.sections {
        out.push_str(&format!(
            "{BOLD}{}{RESET}\n",
            locale.section_header(section.section)
        ));

        for row in section.cells.chunks(columns) {
            let rendered: Vec<Vec<String>> = row.iter().map(|c| cell_lines(c, locale)).collect();

            out.push_str(&format!("┌{}┐\n", vec![border.as_str(); row.len()].join("┬")));
            for i in 0..CELL_LINES {
                out.push('│');
                for cell in &rendered {
                    out.push(' ');
                    out.push_str(&cell[i]);
                    out.push_str(" │");
                }
                out.push('\n');
            }
            out.push_str(&format!("└{}┘\n", vec![border.as_str(); row.len()].join("┴")));
        }
        out.push('\n');
    }

    out
}
