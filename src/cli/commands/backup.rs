use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

use super::open_session;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let session = open_session(cfg)?;
        BackupLogic::backup(&session, &cfg.database, file, *compress, *force)?;
    }

    Ok(())
}
