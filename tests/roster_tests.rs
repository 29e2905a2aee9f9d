mod common;
use common::{sample_roster, sample_state};
use rollcall::errors::AppError;
use rollcall::export::attendance_csv::write_attendance;
use rollcall::export::json::to_json;
use rollcall::export::model::build_records;
use rollcall::export::roster_csv::{load_roster, parse_roster, write_roster};
use rollcall::models::{AttendanceState, Roster, SeatKey};

fn tuples(roster: &Roster) -> Vec<(u32, u32, String, Option<String>, bool)> {
    roster
        .occupied()
        .map(|s| {
            (
                s.key.section,
                s.key.seat,
                s.display_name().to_string(),
                s.affiliation.clone(),
                s.withdrawn,
            )
        })
        .collect()
}

#[test]
fn test_parse_sample_roster() {
    let roster = sample_roster();

    assert_eq!(roster.len(), 5);
    assert_eq!(roster.sections(), vec![2, 3]);
    assert_eq!(roster.max_seat(2), 4);
    assert_eq!(roster.max_seat(3), 2);
    assert_eq!(roster.withdrawn_count(), 1);

    let eve = roster.get(&SeatKey::new(3, 2)).unwrap();
    assert!(eve.withdrawn);
    assert!(!eve.is_interactable());

    let carol = roster.get(&SeatKey::new(2, 4)).unwrap();
    assert_eq!(carol.affiliation, None);
}

#[test]
fn test_rows_missing_required_fields_are_dropped() {
    let csv = "\
Class,Seat,Name,School
2,1,Alice,
2,2,,x
,3,Nobody,
2,,Nobody,
2,five,Bad,
2,0,Zero,
";
    let import = parse_roster(csv.as_bytes()).unwrap();

    assert_eq!(import.roster.len(), 1);
    assert_eq!(import.dropped.len(), 5);
    assert_eq!(import.dropped[0].line, 3);
}

#[test]
fn test_row_with_invalid_utf8_is_dropped() {
    let csv: &[u8] = b"Class,Seat,Name\n2,1,Alice\n2,2,Bo\xff\xfeb\n2,3,Carol\n";
    let import = parse_roster(csv).unwrap();

    assert_eq!(import.roster.len(), 2);
    assert!(import.roster.get(&SeatKey::new(2, 1)).is_some());
    assert!(import.roster.get(&SeatKey::new(2, 2)).is_none());
    assert!(import.roster.get(&SeatKey::new(2, 3)).is_some());
    assert_eq!(import.dropped.len(), 1);
    assert_eq!(import.dropped[0].line, 3);
}

#[test]
fn test_quotes_and_header_aliases() {
    let csv = "\
\"Section\",\"seat\",\"NAME\",\"Dorm\",\"Withdrawn\",\"Status\"
\"4\",\"2\",\" Mya \",\"လှ\",\"true\",\"Absent\"
\"4\",\"1\",\"Hla\",\"\",\"false\",\"Attend\"
";
    let roster = parse_roster(csv.as_bytes()).unwrap().roster;

    let mya = roster.get(&SeatKey::new(4, 2)).unwrap();
    assert_eq!(mya.display_name(), "Mya");
    assert_eq!(mya.affiliation.as_deref(), Some("လှ"));
    assert!(mya.withdrawn);
    assert!(!roster.get(&SeatKey::new(4, 1)).unwrap().withdrawn);
}

#[test]
fn test_short_rows_and_later_duplicates() {
    let csv = "Class,Seat,Name,School,Left\n1,1,First\n1,1,Second,သိမ်\n";
    let roster = parse_roster(csv.as_bytes()).unwrap().roster;

    assert_eq!(roster.len(), 1);
    let s = roster.get(&SeatKey::new(1, 1)).unwrap();
    assert_eq!(s.display_name(), "Second");
    assert_eq!(s.affiliation.as_deref(), Some("သိမ်"));
}

#[test]
fn test_missing_required_column_is_an_error() {
    let csv = "Class,Seat,School\n1,1,x\n";
    assert!(matches!(
        parse_roster(csv.as_bytes()),
        Err(AppError::MissingColumn("Name"))
    ));
}

#[test]
fn test_missing_file_is_a_load_error() {
    let res = load_roster("/definitely/not/here/students.csv");
    assert!(matches!(res, Err(AppError::RosterLoad { .. })));
}

#[test]
fn test_roster_round_trip() {
    let roster = sample_roster();
    let mut buf = Vec::new();
    write_roster(&roster, &mut buf).unwrap();

    let text = String::from_utf8(buf.clone()).unwrap();
    assert!(text.starts_with("\"Class\",\"Seat\",\"Name\",\"School\",\"Left\""));

    let again = parse_roster(buf.as_slice()).unwrap().roster;
    assert_eq!(tuples(&again), tuples(&roster));
}

#[test]
fn test_attendance_export_reimports_to_same_roster() {
    let mut state = sample_state();
    state.attendance.cycle(&SeatKey::new(2, 1));
    state.attendance.cycle(&SeatKey::new(3, 1));
    state.attendance.cycle(&SeatKey::new(3, 1));

    let records = build_records(&state);
    let mut buf = Vec::new();
    write_attendance(&records, &mut buf).unwrap();

    let reimported = parse_roster(buf.as_slice()).unwrap().roster;
    assert_eq!(tuples(&reimported), tuples(&state.roster));
}

#[test]
fn test_attendance_export_status_column() {
    let mut state = sample_state();
    state.attendance.cycle(&SeatKey::new(2, 1));
    state.attendance.cycle(&SeatKey::new(3, 1));
    state.attendance.cycle(&SeatKey::new(3, 1));

    let records = build_records(&state);
    assert_eq!(records.len(), 5);

    let status = |section, seat| {
        records
            .iter()
            .find(|r| r.section == section && r.seat == seat)
            .map(|r| r.status.clone())
            .unwrap()
    };
    assert_eq!(
        AttendanceState::from_export_label(&status(2, 1)),
        Some(AttendanceState::Absent)
    );
    assert_eq!(status(2, 2), "Attend");
    assert_eq!(status(3, 1), "Leave");
    assert_eq!(status(3, 2), "");

    let mut buf = Vec::new();
    write_attendance(&records, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(
        text.lines().next(),
        Some("\"Row/Class\",\"Seat\",\"Name\",\"Dorm\",\"Left\",\"Status\"")
    );
    assert!(text.contains("\"2\",\"1\",\"Alice\",\"လှ\",\"false\",\"Absent\""));
}

#[test]
fn test_attendance_json_export() {
    let records = build_records(&sample_state());
    let json = to_json(&records).unwrap();
    assert!(json.contains("\"name\": \"Alice\""));
    assert!(json.contains("\"status\": \"Attend\""));
}
