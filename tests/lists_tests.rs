mod common;
use chrono::NaiveDate;
use common::{memory_session, sample_state};
use rollcall::core::export::ExportLogic;
use rollcall::core::lists::{ListKind, compile};
use rollcall::core::session::AppState;
use rollcall::errors::AppError;
use rollcall::export::roster_csv::parse_roster;
use rollcall::models::{AttendanceState, SeatKey};
use rollcall::ui::locale::Locale;

fn two_student_session() -> rollcall::core::session::Session {
    let csv = "Class,Seat,Name\n2,1,Alice\n2,2,Bob\n";
    memory_session(parse_roster(csv.as_bytes()).unwrap().roster)
}

#[test]
fn test_click_scenario_moves_seat_between_lists() {
    let mut session = two_student_session();
    let alice = SeatKey::new(2, 1);

    session.cycle(alice).unwrap();
    assert_eq!(
        session.lists().absent.lines(Locale::En),
        vec!["Section 2, Seat 1: Alice"]
    );
    assert!(session.lists().on_leave.is_empty());

    session.cycle(alice).unwrap();
    assert!(session.lists().absent.is_empty());
    assert_eq!(
        session.lists().on_leave.lines(Locale::En),
        vec!["Section 2, Seat 1: Alice"]
    );

    session.cycle(alice).unwrap();
    assert!(session.lists().absent.is_empty());
    assert!(session.lists().on_leave.is_empty());
}

#[test]
fn test_lists_sorted_numerically_by_section_then_seat() {
    let csv = "\
Class,Seat,Name
10,2,Kay
2,10,Zed
2,9,Yan
10,1,Jo
";
    let roster = parse_roster(csv.as_bytes()).unwrap().roster;
    let mut state = AppState::new(roster);
    for key in [
        SeatKey::new(10, 2),
        SeatKey::new(2, 10),
        SeatKey::new(2, 9),
        SeatKey::new(10, 1),
    ] {
        state.attendance.cycle(&key);
    }

    let lists = compile(&state);
    let keys: Vec<SeatKey> = lists.absent.entries.iter().map(|e| e.key).collect();
    assert_eq!(
        keys,
        vec![
            SeatKey::new(2, 9),
            SeatKey::new(2, 10),
            SeatKey::new(10, 1),
            SeatKey::new(10, 2)
        ]
    );
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_lists_are_disjoint_and_complete() {
    let mut state = sample_state();
    state.attendance.cycle(&SeatKey::new(2, 1)); // absent
    state.attendance.cycle(&SeatKey::new(2, 2));
    state.attendance.cycle(&SeatKey::new(2, 2)); // on leave
    state.attendance.cycle(&SeatKey::new(3, 1)); // absent

    let lists = compile(&state);

    for e in &lists.absent.entries {
        assert_eq!(state.attendance.get(&e.key), AttendanceState::Absent);
        assert!(!lists.on_leave.entries.iter().any(|o| o.key == e.key));
    }
    for e in &lists.on_leave.entries {
        assert_eq!(state.attendance.get(&e.key), AttendanceState::OnLeave);
    }
    assert_eq!(
        lists.absent.len(),
        state.attendance.count(AttendanceState::Absent)
    );
    assert_eq!(
        lists.on_leave.len(),
        state.attendance.count(AttendanceState::OnLeave)
    );
}

#[test]
fn test_empty_list_placeholder_disables_export() {
    let lists = compile(&sample_state());

    assert_eq!(lists.absent.lines(Locale::En), vec!["No absentees."]);
    assert_eq!(lists.on_leave.lines(Locale::My), vec!["ခွင့်ရှိသူ မရှိပါ။"]);
    assert!(!lists.absent.export_enabled());
    assert!(!lists.on_leave.export_enabled());

    let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    assert!(ExportLogic::copy_text(&lists.absent, Locale::En, date).is_none());
}

#[test]
fn test_copy_to_file_requires_absolute_path() {
    let mut session = two_student_session();
    session.cycle(SeatKey::new(2, 1)).unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let res = ExportLogic::copy_to_file(
        &session,
        ListKind::Absent,
        Locale::En,
        date,
        "absent.txt",
        true,
    );
    assert!(matches!(res, Err(AppError::Export(_))));
    assert!(!std::path::Path::new("absent.txt").exists());
}

#[test]
fn test_clipboard_text_has_label_date_and_entries() {
    let mut state = sample_state();
    state.attendance.cycle(&SeatKey::new(3, 1));
    state.attendance.cycle(&SeatKey::new(2, 4));
    let lists = compile(&state);
    assert!(lists.absent.export_enabled());

    let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let text = lists.get(ListKind::Absent).clipboard_text(Locale::En, date).unwrap();

    assert_eq!(
        text,
        "Absent list (19 Oct 2026):\n\nSection 2, Seat 4: Carol\nSection 3, Seat 1: Dan"
    );
}

#[test]
fn test_burmese_entries_and_date() {
    let mut state = sample_state();
    state.attendance.cycle(&SeatKey::new(2, 1));
    state.attendance.cycle(&SeatKey::new(2, 1));
    let lists = compile(&state);

    let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    let text = lists.on_leave.clipboard_text(Locale::My, date).unwrap();

    assert!(text.starts_with("ခွင့်စာရင်း (ဇန် ၅ ရက်၊ ၂၀၂၅):"));
    assert!(text.ends_with("အတန်း 2၊ ခုံ 1: Alice"));
}
