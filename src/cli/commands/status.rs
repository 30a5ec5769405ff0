use super::{open_session, print_start_hint};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Status) {
        let mut session = open_session(cfg)?;
        let Some(config) = session.config().cloned() else {
            return print_start_hint(&session);
        };

        let (state, ledger) = session.refresh()?;
        print!(
            "{}",
            render::dashboard(&config, &state, &ledger, &cfg.currency_symbol)
        );
    }

    Ok(())
}
