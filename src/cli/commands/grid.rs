use crate::config::Config;
use crate::core::grid::render;
use crate::errors::AppResult;
use crate::ui::messages::warning;

use super::lists::print_lists;
use super::open_session;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_session(cfg)?;
    let view = session.grid();

    if view.is_empty() {
        warning("The roster has no seats.");
        return Ok(());
    }

    print!("{}", render(&view, cfg.language, cfg.grid_columns));
    print_lists(session.lists(), cfg.language);
    Ok(())
}
