use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::lists::ListKind;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::date::today;

use super::open_session;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Copy {
        absent,
        leave: _,
        file,
        force,
    } = cmd
    {
        let session = open_session(cfg)?;
        let kind = if *absent {
            ListKind::Absent
        } else {
            ListKind::OnLeave
        };
        let locale = cfg.language;
        let date = today();

        match file {
            Some(f) => {
                if !ExportLogic::copy_to_file(&session, kind, locale, date, f, *force)? {
                    warning(format!("{}: nothing to copy.", kind.title(locale)));
                }
            }
            None => match ExportLogic::copy_text(session.lists().get(kind), locale, date) {
                Some(text) => println!("{text}"),
                None => warning(format!("{}: nothing to copy.", kind.title(locale))),
            },
        }
    }
    Ok(())
}
