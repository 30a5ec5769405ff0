use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::render;
use crate::utils::format_currency;

/// Configure the tracker. Missing date/time take the current ones.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start {
        label,
        date,
        time,
        rate,
    } = cmd
    {
        let mut session = open_session(cfg)?;
        let defaults = session.defaults()?;

        let date = date.clone().unwrap_or(defaults.date);
        let time = time.clone().unwrap_or(defaults.time);

        let config = session.start(label, &date, &time, rate)?;
        success(format!(
            "Tracking '{}' since {} at {} per day",
            config.label,
            render::start_display(config),
            format_currency(config.daily_rate, &cfg.currency_symbol)
        ));
    }

    Ok(())
}
