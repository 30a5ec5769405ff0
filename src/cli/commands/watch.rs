use super::{open_session, print_start_hint};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::ui::render;
use std::io::{self, IsTerminal, Write};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Keep redrawing the dashboard until interrupted, or until a future start halts updates.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { ticks } = cmd {
        let mut session = open_session(cfg)?;
        let Some(config) = session.config().cloned() else {
            return print_start_hint(&session);
        };

        let clear = io::stdout().is_terminal();

        session.watch(*ticks, |state, ledger| {
            let screen = render::dashboard(&config, state, ledger, &cfg.currency_symbol);
            if clear {
                print!("{CLEAR_SCREEN}");
            }
            print!("{screen}");
            let _ = io::stdout().flush();
        })?;

        if !session.is_ticking() {
            warning("Updates halted. Reset the tracker to choose another start time.");
        }
    }

    Ok(())
}
