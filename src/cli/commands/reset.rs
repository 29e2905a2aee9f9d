use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

use super::lists::print_lists;
use super::open_session;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cfg)?;
    session.reset()?;

    success("All seats reset to present.");
    println!();
    print_lists(session.lists(), cfg.language);
    Ok(())
}
