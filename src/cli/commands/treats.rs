use super::{open_session, print_start_hint};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render;
use crate::utils::format_currency;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Treats) {
        let mut session = open_session(cfg)?;
        if !session.is_active() {
            return print_start_hint(&session);
        }

        let ledger = session.treats()?;
        if ledger.is_empty() {
            info("No treats logged yet.");
            return Ok(());
        }

        print!("{}", render::treat_table(&ledger, &cfg.currency_symbol));
        println!(
            "\nTotal: {} over {} treat(s)",
            format_currency(ledger.total_spent(), &cfg.currency_symbol),
            ledger.len()
        );
    }

    Ok(())
}
