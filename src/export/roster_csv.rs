//! Roster codec: the comma-separated seating table.
//!
//! Columns are located by header name, case-insensitively:
//! section `Class`/`Section`/`Row`, `Seat`, `Name`, optional affiliation
//! `School`/`Dorm`/`Affiliation` and withdrawn flag `Left`/`Withdrawn`.
//! Any other column (e.g. `Status` of an attendance export) is ignored.
//! A row that is not valid UTF-8 is dropped like an incomplete one.
//!
//! Known limitation: a value must not contain the separator or a line
//! break. Quotes around values are stripped.

use crate::errors::{AppError, AppResult};
use crate::export::model::ROSTER_HEADERS;
use crate::models::{Roster, Seat, SeatKey};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

const SECTION_ALIASES: &[&str] = &["class", "section", "row", "row/class"];
const SEAT_ALIASES: &[&str] = &["seat"];
const NAME_ALIASES: &[&str] = &["name"];
const AFFILIATION_ALIASES: &[&str] = &["school", "dorm", "affiliation"];
const WITHDRAWN_ALIASES: &[&str] = &["left", "withdrawn"];

/// A source row that did not make it into the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct RosterImport {
    pub roster: Roster,
    pub dropped: Vec<DroppedRow>,
}

struct Columns {
    section: usize,
    seat: usize,
    name: usize,
    affiliation: Option<usize>,
    withdrawn: Option<usize>,
}

fn find(headers: &StringRecord, aliases: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.trim_start_matches('\u{feff}').trim().to_lowercase();
        aliases.contains(&h.as_str())
    })
}

impl Columns {
    fn locate(headers: &StringRecord) -> AppResult<Self> {
        Ok(Self {
            section: find(headers, SECTION_ALIASES).ok_or(AppError::MissingColumn("Class"))?,
            seat: find(headers, SEAT_ALIASES).ok_or(AppError::MissingColumn("Seat"))?,
            name: find(headers, NAME_ALIASES).ok_or(AppError::MissingColumn("Name"))?,
            affiliation: find(headers, AFFILIATION_ALIASES),
            withdrawn: find(headers, WITHDRAWN_ALIASES),
        })
    }
}

fn cell(rec: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| rec.get(i)).unwrap_or("").trim()
}

/// Parse a roster table. Incomplete or malformed rows are collected in
/// `dropped`, never reported as errors.
pub fn parse_roster<R: Read>(reader: R) -> AppResult<RosterImport> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let cols = Columns::locate(rdr.headers()?)?;
    let mut out = RosterImport::default();

    for result in rdr.byte_records() {
        let raw = result?;
        let line = raw.position().map(|p| p.line()).unwrap_or(0);
        let rec = match StringRecord::from_byte_record(raw) {
            Ok(r) => r,
            Err(_) => {
                out.dropped.push(DroppedRow {
                    line,
                    reason: "row is not valid UTF-8".to_string(),
                });
                continue;
            }
        };

        let section = cell(&rec, Some(cols.section));
        let seat = cell(&rec, Some(cols.seat));
        let name = cell(&rec, Some(cols.name));

        if section.is_empty() || seat.is_empty() || name.is_empty() {
            out.dropped.push(DroppedRow {
                line,
                reason: "missing Class, Seat or Name".to_string(),
            });
            continue;
        }

        let key = match SeatKey::parse(section, seat) {
            Ok(k) => k,
            Err(e) => {
                out.dropped.push(DroppedRow {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let affiliation = cell(&rec, cols.affiliation);
        let withdrawn = cell(&rec, cols.withdrawn) == "true";

        out.roster
            .insert(Seat::new(key, name, Some(affiliation), withdrawn));
    }

    Ok(out)
}

/// Load the roster file at `path`. Any failure (missing file, unreadable
/// table, missing header) is reported as a roster load error.
pub fn load_roster(path: &str) -> AppResult<RosterImport> {
    let wrap = |e: AppError| AppError::RosterLoad {
        path: path.to_string(),
        reason: e.to_string(),
    };
    let file = File::open(Path::new(path)).map_err(|e| wrap(e.into()))?;
    parse_roster(file).map_err(wrap)
}

/// Write `roster` in the source format (admin download), every value quoted.
pub fn write_roster<W: Write>(roster: &Roster, writer: W) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    wtr.write_record(ROSTER_HEADERS)?;

    for seat in roster.occupied() {
        wtr.write_record([
            seat.key.section.to_string(),
            seat.key.seat.to_string(),
            seat.display_name().to_string(),
            seat.affiliation.clone().unwrap_or_default(),
            seat.withdrawn.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
