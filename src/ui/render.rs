//! Text rendering of the tracker state.

use crate::core::ledger::TreatLedger;
use crate::models::session_state::SessionState;
use crate::models::tracker_config::TrackerConfig;
use crate::utils::format_currency;
use crate::utils::table::{Align, Column, Table};
use ansi_term::{Colour, Style};

pub const FUTURE_MESSAGE: &str = "Start time is in the future!";

/// "Jan 5, 2025, 08:00"
pub fn start_display(config: &TrackerConfig) -> String {
    config.start.format("%b %-d, %Y, %H:%M").to_string()
}

pub fn header(config: &TrackerConfig) -> String {
    format!(
        "{}\nSince {}",
        Style::new().bold().paint(config.label.as_str()),
        start_display(config)
    )
}

/// Time units line, or the future-start notice.
pub fn time_line(state: &SessionState) -> String {
    match state.elapsed.units() {
        Some(units) => units
            .labelled()
            .iter()
            .map(|(value, label)| format!("{:02} {}", value, label))
            .collect::<Vec<_>>()
            .join("  "),
        None => Colour::Yellow.paint(FUTURE_MESSAGE).to_string(),
    }
}

pub fn money_lines(state: &SessionState, symbol: &str) -> String {
    format!(
        "Money saved:  {}\nTreats spent: {}",
        format_currency(state.net_saved, symbol),
        format_currency(state.total_treats, symbol)
    )
}

/// Newest first; empty string when there is nothing to show.
pub fn treat_table(ledger: &TreatLedger, symbol: &str) -> String {
    if ledger.is_empty() {
        return String::new();
    }

    let mut table = Table::new(vec![
        Column::new("Treat", Align::Left),
        Column::new("When", Align::Left),
        Column::new("Amount", Align::Right),
    ]);
    for treat in ledger.newest_first() {
        table.add_row(vec![
            treat.label.clone(),
            treat.local_timestamp().format("%b %-d, %H:%M").to_string(),
            format!("-{}", format_currency(treat.amount, symbol)),
        ]);
    }
    table.render()
}

pub fn dashboard(
    config: &TrackerConfig,
    state: &SessionState,
    ledger: &TreatLedger,
    symbol: &str,
) -> String {
    let mut out = format!(
        "{}\n\n{}\n\n{}\n",
        header(config),
        time_line(state),
        money_lines(state, symbol)
    );
    let treats = treat_table(ledger, symbol);
    if !treats.is_empty() {
        out.push('\n');
        out.push_str(&treats);
    }
    out
}
