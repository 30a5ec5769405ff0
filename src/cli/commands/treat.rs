use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::render;
use crate::utils::format_currency;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Treat { label, amount } = cmd {
        let mut session = open_session(cfg)?;
        let treat = session.log_treat(label, amount)?;

        success(format!(
            "Logged treat '{}' ({})",
            treat.label,
            format_currency(treat.amount, &cfg.currency_symbol)
        ));

        let state = session.tick()?;
        println!("{}", render::money_lines(&state, &cfg.currency_symbol));
    }

    Ok(())
}
