//! Tracker lifecycle: Unconfigured ⇄ Active, ticks and treat logging.

use crate::core::calculator::{SavingsCalculator, elapsed_seconds, gross_saved};
use crate::core::clock::Clock;
use crate::core::ledger::TreatLedger;
use crate::core::scheduler::{Scheduler, TimerHandle};
use crate::errors::{AppError, AppResult};
use crate::models::input_defaults::InputDefaults;
use crate::models::session_state::SessionState;
use crate::models::tracker_config::TrackerConfig;
use crate::models::treat::Treat;
use crate::store::{
    ALL_KEYS, DAILY_SAVING_KEY, KeyValueStore, OperationLog, START_DATETIME_KEY,
    TRACKER_LABEL_KEY,
};
use crate::ui::messages::warning;
use crate::utils::date::{parse_date, parse_time};
use crate::utils::money::parse_decimal;
use chrono::Utc;
use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct TrackerSession<S, C, T> {
    store: S,
    clock: C,
    scheduler: T,
    interval: Duration,
    config: Option<TrackerConfig>,
    timer: Option<TimerHandle>,
}

/// Read the three configuration keys. Missing or empty values mean
/// "not configured"; present but unreadable values are logged and ignored.
fn read_config<S: KeyValueStore + OperationLog>(store: &mut S) -> AppResult<Option<TrackerConfig>> {
    let label = store.get(TRACKER_LABEL_KEY)?.filter(|s| !s.is_empty());
    let start = store.get(START_DATETIME_KEY)?.filter(|s| !s.is_empty());
    let rate = store.get(DAILY_SAVING_KEY)?.filter(|s| !s.is_empty());

    let (Some(label), Some(start_raw), Some(rate_raw)) = (label, start, rate) else {
        return Ok(None);
    };

    let Some(start) = TrackerConfig::parse_start(&start_raw) else {
        report_corruption(store, START_DATETIME_KEY, &start_raw);
        return Ok(None);
    };

    let Some(daily_rate) = parse_decimal(&rate_raw).filter(|r| *r >= 0.0) else {
        report_corruption(store, DAILY_SAVING_KEY, &rate_raw);
        return Ok(None);
    };

    let config = TrackerConfig {
        label,
        start,
        daily_rate,
    };
    // A local time skipped by a DST change can never be resolved.
    if config.start_instant().is_err() {
        report_corruption(store, START_DATETIME_KEY, &start_raw);
        return Ok(None);
    }
    Ok(Some(config))
}

fn report_corruption<S: OperationLog>(store: &mut S, key: &str, raw: &str) {
    let msg = format!("Unreadable value '{}' for '{}', tracker left unconfigured", raw, key);
    warning(&msg);
    store.log_operation("corruption", key, &msg);
}

impl<S, C, T> TrackerSession<S, C, T>
where
    S: KeyValueStore + OperationLog,
    C: Clock,
    T: Scheduler,
{
    pub fn new(store: S, clock: C, scheduler: T) -> AppResult<Self> {
        Self::with_interval(store, clock, scheduler, DEFAULT_TICK_INTERVAL)
    }

    pub fn with_interval(store: S, clock: C, scheduler: T, interval: Duration) -> AppResult<Self> {
        let mut session = Self {
            store,
            clock,
            scheduler,
            interval,
            config: None,
            timer: None,
        };
        session.load()?;
        Ok(session)
    }

    /// Re-derive the state from the store and (re)start the cadence when Active.
    pub fn load(&mut self) -> AppResult<()> {
        self.halt();
        self.config = read_config(&mut self.store)?;
        if self.config.is_some() {
            self.timer = Some(self.scheduler.schedule(self.interval));
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.config.is_some()
    }

    pub fn config(&self) -> Option<&TrackerConfig> {
        self.config.as_ref()
    }

    /// Whether periodic updates are running.
    pub fn is_ticking(&self) -> bool {
        self.timer.is_some_and(|h| self.scheduler.is_scheduled(h))
    }

    /// Pre-filled values for the configuration form.
    pub fn defaults(&self) -> AppResult<InputDefaults> {
        let label = self.store.get(TRACKER_LABEL_KEY)?;
        Ok(InputDefaults::at(self.clock.now(), label))
    }

    /// Validate and persist a new configuration.
    ///
    /// Checks run in order and the first failure aborts with nothing written:
    /// label, presence of date and time, their formats, daily rate, and
    /// finally that the local start time exists (not inside a DST gap).
    /// An existing treat log is kept; only [`reset`](Self::reset) clears it.
    pub fn start(
        &mut self,
        label: &str,
        date: &str,
        time: &str,
        daily_rate: &str,
    ) -> AppResult<&TrackerConfig> {
        let label = label.trim();
        if label.is_empty() {
            return Err(AppError::EmptyLabel);
        }

        if date.trim().is_empty() || time.trim().is_empty() {
            return Err(AppError::MissingStartDateTime);
        }
        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let t = parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;

        let rate = parse_decimal(daily_rate)
            .filter(|r| *r >= 0.0)
            .ok_or_else(|| AppError::InvalidDailyRate(daily_rate.to_string()))?;

        let config = TrackerConfig {
            label: label.to_string(),
            start: d.and_time(t),
            daily_rate: rate,
        };
        config.start_instant()?;

        self.store.set(TRACKER_LABEL_KEY, &config.label)?;
        self.store.set(START_DATETIME_KEY, &config.start_str())?;
        self.store.set(DAILY_SAVING_KEY, &rate.to_string())?;

        if !TreatLedger::exists(&self.store)? {
            TreatLedger::new().persist(&mut self.store)?;
        } else {
            let inherited = TreatLedger::load(&mut self.store)?;
            if !inherited.is_empty() {
                // The previous tracker was never reset: its treats now count
                // against the new one.
                let msg = format!(
                    "Keeping {} treat(s) totalling {:.2} from a previous tracker",
                    inherited.len(),
                    inherited.total_spent()
                );
                warning(&msg);
                self.store.log_operation("stale_ledger", &config.label, &msg);
            }
        }

        self.store.log_operation(
            "start",
            &config.label,
            &format!(
                "Tracker started at {} with daily saving {}",
                config.start_str(),
                rate
            ),
        );

        self.halt();
        self.timer = Some(self.scheduler.schedule(self.interval));
        Ok(&*self.config.insert(config))
    }

    /// Clear every tracker key and stop updates. Confirmation is up to the caller.
    pub fn reset(&mut self) -> AppResult<InputDefaults> {
        for key in ALL_KEYS {
            self.store.remove(key)?;
        }
        self.halt();
        self.config = None;
        self.store
            .log_operation("reset", "", "Tracker reset, all data cleared");
        self.defaults()
    }

    /// Recompute the display state. A future start stops the cadence for good.
    pub fn tick(&mut self) -> AppResult<SessionState> {
        self.refresh().map(|(state, _)| state)
    }

    /// Like [`tick`](Self::tick), also handing back the ledger the state was
    /// computed from so a display can list the same treats it totals.
    pub fn refresh(&mut self) -> AppResult<(SessionState, TreatLedger)> {
        let Some(config) = self.config.as_ref() else {
            return Err(AppError::NotConfigured);
        };

        let ledger = TreatLedger::load(&mut self.store)?;
        let state = SavingsCalculator::snapshot(self.clock.now(), config, ledger.total_spent())?;

        if state.elapsed.is_future() {
            self.halt();
        }
        Ok((state, ledger))
    }

    /// Log a treat against current savings.
    ///
    /// The amount must fit in `gross - already spent` at the instant of the call;
    /// otherwise [`AppError::InsufficientSavings`] reports what is available.
    pub fn log_treat(&mut self, label: &str, amount: &str) -> AppResult<Treat> {
        let Some(config) = self.config.as_ref() else {
            return Err(AppError::NotConfigured);
        };
        if !self.is_ticking() {
            return Err(AppError::FutureStart);
        }

        let label = label.trim();
        if label.is_empty() {
            return Err(AppError::EmptyTreatLabel);
        }
        let requested = parse_decimal(amount)
            .filter(|a| *a > 0.0)
            .ok_or_else(|| AppError::InvalidTreatAmount(amount.to_string()))?;

        let now = self.clock.now();
        let elapsed = elapsed_seconds(now, config.start_instant()?);
        if elapsed < 0 {
            self.halt();
            return Err(AppError::FutureStart);
        }
        let gross = gross_saved(elapsed, config.daily_rate);

        let ledger = TreatLedger::load(&mut self.store)?;
        let spent = ledger.total_spent();
        if spent + requested > gross {
            return Err(AppError::InsufficientSavings {
                available: gross - spent,
                requested,
            });
        }

        let treat = Treat::new(label, requested, now.with_timezone(&Utc));
        ledger.append(treat.clone()).persist(&mut self.store)?;

        self.store.log_operation(
            "treat",
            label,
            &format!("Logged treat of {:.2}", requested),
        );
        Ok(treat)
    }

    /// The persisted treats.
    pub fn treats(&mut self) -> AppResult<TreatLedger> {
        TreatLedger::load(&mut self.store)
    }

    /// Tick, render, wait for the next firing; repeat until the cadence stops
    /// or `max_ticks` ticks have been rendered. Returns the number of ticks.
    ///
    /// The ledger is re-read on every tick: another process may log treats
    /// against the same store meanwhile.
    pub fn watch<F>(&mut self, max_ticks: Option<u64>, mut render: F) -> AppResult<u64>
    where
        F: FnMut(&SessionState, &TreatLedger),
    {
        let mut ticks = 0;
        loop {
            let (state, ledger) = self.refresh()?;
            render(&state, &ledger);
            ticks += 1;

            if max_ticks.is_some_and(|max| ticks >= max) {
                break;
            }
            let Some(handle) = self.timer else {
                break;
            };
            if !self.scheduler.wait(handle) {
                break;
            }
        }
        Ok(ticks)
    }

    fn halt(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
