use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET};

use super::open_session;

fn print_summary(session: &Session, cfg: &Config) {
    let roster = &session.state().roster;
    header(format!("Roster: {}", cfg.roster));

    println!("{:<10} {:>8} {:>8} {:>10}", "Section", "Seats", "Max", "Withdrawn");
    for section in roster.sections() {
        let seats: Vec<_> = roster
            .occupied()
            .filter(|s| s.key.section == section)
            .collect();
        let withdrawn = seats.iter().filter(|s| s.withdrawn).count();
        println!(
            "{:<10} {:>8} {:>8} {:>10}",
            section,
            seats.len(),
            roster.max_seat(section),
            withdrawn
        );
    }
    println!(
        "{GREY}{} students, {} withdrawn{RESET}",
        roster.len(),
        roster.withdrawn_count()
    );
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster {
        print,
        export,
        force,
    } = cmd
    {
        let session = open_session(cfg)?;

        if *print || export.is_none() {
            print_summary(&session, cfg);
        }
        if let Some(file) = export {
            ExportLogic::export_roster(&session, file, *force)?;
        }
    }
    Ok(())
}
