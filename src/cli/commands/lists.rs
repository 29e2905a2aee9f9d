use crate::config::Config;
use crate::core::lists::{AttendanceList, CompiledLists};
use crate::errors::AppResult;
use crate::ui::locale::Locale;
use crate::ui::messages::detail;
use crate::utils::colors::{BOLD, GREY, RED, RESET, YELLOW};
use crate::utils::date::today;

use super::open_session;

fn print_list(list: &AttendanceList, locale: Locale, color: &str) {
    println!(
        "{BOLD}{color}{}{RESET} ({})",
        list.kind.title(locale),
        list.len()
    );
    detail(locale.format_date(today()));

    let line_color = if list.is_empty() { GREY } else { color };
    for line in list.lines(locale) {
        println!("  {line_color}{line}{RESET}");
    }
    println!();
}

/// Print both lists, absent first.
pub(crate) fn print_lists(lists: &CompiledLists, locale: Locale) {
    print_list(&lists.absent, locale, RED);
    print_list(&lists.on_leave, locale, YELLOW);
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_session(cfg)?;
    print_lists(session.lists(), cfg.language);
    Ok(())
}
