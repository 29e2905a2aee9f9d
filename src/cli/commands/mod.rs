pub mod backup;
pub mod config;
pub mod copy;
pub mod export;
pub mod grid;
pub mod init;
pub mod lists;
pub mod log;
pub mod mark;
pub mod reset;
pub mod roster;

use crate::config::Config;
use crate::core::session::Session;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::export::roster_csv::load_roster;
use crate::ui::messages::error;

/// Load the roster, open the database and reconcile the stored snapshot.
///
/// A roster that cannot be loaded shows the localized load error; no seat is
/// rendered and no attendance operation runs.
pub(crate) fn open_session(cfg: &Config) -> AppResult<Session> {
    let import = match load_roster(&cfg.roster) {
        Ok(i) => i,
        Err(e) => {
            error(cfg.language.load_error());
            return Err(e);
        }
    };

    let pool = open_db(&cfg.database)?;

    let session = Session::open(pool, import.roster)?;

    // dropped rows are diagnostics only: they go to the internal log
    for d in &import.dropped {
        session.log("import_drop", &format!("line {}", d.line), &d.reason);
    }
    session.log(
        "load",
        &cfg.roster,
        &format!(
            "{} seats loaded, {} rows dropped",
            session.state().roster.len(),
            import.dropped.len()
        ),
    );

    Ok(session)
}
