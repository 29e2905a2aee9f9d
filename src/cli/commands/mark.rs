use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{AttendanceState, SeatKey};
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, RED, RESET, YELLOW};

use super::lists::print_lists;
use super::open_session;

fn describe(state: AttendanceState) -> String {
    match state {
        AttendanceState::Present => format!("{GREEN}present{RESET}"),
        AttendanceState::Absent => format!("{RED}absent{RESET}"),
        AttendanceState::OnLeave => format!("{YELLOW}on leave{RESET}"),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark { section, seat } = cmd {
        let mut session = open_session(cfg)?;
        let key = SeatKey::new(*section, *seat);

        let state = session.cycle(key)?;
        let name = session
            .state()
            .roster
            .get(&key)
            .map(|s| s.display_name().to_string())
            .unwrap_or_default();

        info(format!(
            "{} → {}",
            cfg.language.list_entry(key.section, key.seat, &name),
            describe(state)
        ));
        println!();
        print_lists(session.lists(), cfg.language);
    }
    Ok(())
}
