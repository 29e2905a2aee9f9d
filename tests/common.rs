#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rollcall::core::session::{AppState, Session};
use rollcall::db::pool::DbPool;
use rollcall::export::roster_csv::parse_roster;
use rollcall::models::Roster;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Small roster: two sections, a gap (seat 2/3), a withdrawn student (3/2).
pub const SAMPLE_ROSTER: &str = "\
Class,Seat,Name,School,Left
2,1,Alice,လှ,false
2,2,Bob,သိမ်,false
2,4,Carol,,false
3,1,Dan,လှ,false
3,2,Eve,,true
";

/// rollcall binary with an isolated HOME so no real config is picked up.
pub fn rc() -> Command {
    let mut cmd = cargo_bin_cmd!("rollcall");
    let mut home: PathBuf = env::temp_dir();
    home.push("rollcall_test_home");
    fs::create_dir_all(&home).ok();
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollcall.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` as a roster CSV in the temp dir and return its path.
pub fn write_roster(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_students.csv", name));
    fs::write(&path, content).expect("write roster");
    path.to_string_lossy().to_string()
}

pub fn sample_roster() -> Roster {
    parse_roster(SAMPLE_ROSTER.as_bytes())
        .expect("parse sample roster")
        .roster
}

pub fn sample_state() -> AppState {
    AppState::new(sample_roster())
}

/// Session on a private in-memory database.
pub fn memory_session(roster: Roster) -> Session {
    let pool = DbPool::in_memory().expect("in-memory db");
    Session::open(pool, roster).expect("open session")
}
