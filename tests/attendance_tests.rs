mod common;
use common::{memory_session, sample_roster, setup_test_db};
use rollcall::core::attendance::{AttendanceMap, Snapshot, SnapshotRecord};
use rollcall::core::session::Session;
use rollcall::db::initialize::open_db;
use rollcall::db::snapshot;
use rollcall::errors::AppError;
use rollcall::models::{AttendanceState, SeatKey};

const ALICE: SeatKey = SeatKey { section: 2, seat: 1 };
const BOB: SeatKey = SeatKey { section: 2, seat: 2 };
const EVE_WITHDRAWN: SeatKey = SeatKey { section: 3, seat: 2 };
const GAP: SeatKey = SeatKey { section: 2, seat: 3 };

#[test]
fn test_cycle_order_and_closure() {
    let roster = sample_roster();
    let mut map = AttendanceMap::for_roster(&roster);

    for key in roster.interactable_keys().collect::<Vec<_>>() {
        assert_eq!(map.cycle(&key), Some(AttendanceState::Absent));
        assert_eq!(map.cycle(&key), Some(AttendanceState::OnLeave));
        assert_eq!(map.cycle(&key), Some(AttendanceState::Present));
        assert_eq!(map.get(&key), AttendanceState::Present);
    }
}

#[test]
fn test_withdrawn_and_empty_seats_are_not_tracked() {
    let roster = sample_roster();
    let mut map = AttendanceMap::for_roster(&roster);

    assert_eq!(map.len(), 4);
    assert!(!map.is_tracked(&EVE_WITHDRAWN));
    assert!(!map.is_tracked(&GAP));

    let before = map.clone();
    assert_eq!(map.cycle(&EVE_WITHDRAWN), None);
    assert_eq!(map.cycle(&GAP), None);
    assert_eq!(map, before);
}

#[test]
fn test_get_defaults_to_present() {
    let map = AttendanceMap::for_roster(&sample_roster());
    assert_eq!(map.get(&SeatKey::new(99, 99)), AttendanceState::Present);
    assert_eq!(map.get(&ALICE), AttendanceState::Present);
}

#[test]
fn test_reset_clears_every_mark() {
    let roster = sample_roster();
    let mut map = AttendanceMap::for_roster(&roster);
    map.cycle(&ALICE);
    map.cycle(&BOB);
    map.cycle(&BOB);

    map.reset();

    for key in roster.interactable_keys() {
        assert_eq!(map.get(&key), AttendanceState::Present);
    }
    assert_eq!(map.count(AttendanceState::Present), map.len());
}

#[test]
fn test_restore_reconciles_against_roster() {
    let roster = sample_roster();
    let snap = Snapshot {
        records: vec![
            SnapshotRecord {
                key: SeatKey::new(9, 1), // no longer in roster
                absent: true,
                on_leave: false,
            },
            SnapshotRecord {
                key: EVE_WITHDRAWN,
                absent: true,
                on_leave: false,
            },
            SnapshotRecord {
                key: BOB,
                absent: false,
                on_leave: true,
            },
        ],
    };

    let map = AttendanceMap::restore(&roster, &snap);

    assert!(!map.is_tracked(&SeatKey::new(9, 1)));
    assert!(!map.is_tracked(&EVE_WITHDRAWN));
    assert_eq!(map.get(&BOB), AttendanceState::OnLeave);
    // tracked but absent from the snapshot
    assert_eq!(map.get(&ALICE), AttendanceState::Present);
    assert_eq!(map.len(), 4);
}

#[test]
fn test_record_with_both_flags_reads_as_absent() {
    assert_eq!(
        AttendanceState::from_flags(true, true),
        AttendanceState::Absent
    );
}

#[test]
fn test_snapshot_save_load_is_identity() {
    let roster = sample_roster();
    let mut map = AttendanceMap::for_roster(&roster);
    map.cycle(&ALICE);
    map.cycle(&BOB);
    map.cycle(&BOB);

    let mut pool = open_db(":memory:").expect("open db");
    let snap = map.snapshot();
    snapshot::save(&mut pool.conn, &snap).expect("save");
    let loaded = snapshot::load(&pool.conn).expect("load").expect("some");

    assert_eq!(loaded, snap);
    assert_eq!(AttendanceMap::restore(&roster, &loaded), map);
}

#[test]
fn test_empty_database_has_no_snapshot() {
    let pool = open_db(":memory:").expect("open db");
    assert!(snapshot::load(&pool.conn).expect("load").is_none());
}

#[test]
fn test_session_persists_each_click_across_reopen() {
    let db_path = setup_test_db("session_persists_each_click");

    {
        let pool = open_db(&db_path).expect("open db");
        let mut session = Session::open(pool, sample_roster()).expect("session");
        assert_eq!(session.cycle(ALICE).unwrap(), AttendanceState::Absent);
        assert_eq!(session.cycle(BOB).unwrap(), AttendanceState::Absent);
        assert_eq!(session.cycle(BOB).unwrap(), AttendanceState::OnLeave);
    }

    let pool = open_db(&db_path).expect("reopen db");
    let session = Session::open(pool, sample_roster()).expect("session");
    assert_eq!(session.get(&ALICE), AttendanceState::Absent);
    assert_eq!(session.get(&BOB), AttendanceState::OnLeave);
    assert_eq!(session.lists().absent.len(), 1);
    assert_eq!(session.lists().on_leave.len(), 1);
}

#[test]
fn test_session_rejects_non_interactable_seats() {
    let mut session = memory_session(sample_roster());

    assert!(matches!(
        session.cycle(EVE_WITHDRAWN),
        Err(AppError::SeatNotInteractable(_))
    ));
    assert!(matches!(session.cycle(GAP), Err(AppError::UnknownSeat(_))));
    assert!(session.lists().absent.is_empty());
    assert!(session.lists().on_leave.is_empty());
}

#[test]
fn test_session_reset_persists_all_present() {
    let mut session = memory_session(sample_roster());
    session.cycle(ALICE).unwrap();
    session.cycle(BOB).unwrap();
    session.cycle(BOB).unwrap();

    session.reset().unwrap();

    assert!(session.lists().absent.is_empty());
    assert!(session.lists().on_leave.is_empty());

    let stored = snapshot::load(&session.pool().conn)
        .unwrap()
        .expect("snapshot saved");
    assert_eq!(stored.records.len(), 4);
    assert!(stored.records.iter().all(|r| !r.absent && !r.on_leave));
}
