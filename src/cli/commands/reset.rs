use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if cfg.confirm_reset
            && !*yes
            && !confirm("Are you sure you want to reset the tracker? All data will be lost.")?
        {
            info("Reset cancelled.");
            return Ok(());
        }

        let mut session = open_session(cfg)?;
        let defaults = session.reset()?;

        success("Tracker reset.");
        info(format!(
            "Next start defaults to {} {}",
            defaults.date, defaults.time
        ));
    }

    Ok(())
}
