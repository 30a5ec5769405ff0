use chrono::{Local, TimeDelta, TimeZone};
use proptest::prelude::*;
use rsavetracker::core::calculator::{SavingsCalculator, elapsed_seconds, gross_saved, net_saved};
use rsavetracker::models::session_state::Elapsed;
use rsavetracker::models::time_units::TimeUnits;
use rsavetracker::models::tracker_config::TrackerConfig;

mod common;
use common::{assert_close, local};

fn config(rate: f64) -> TrackerConfig {
    TrackerConfig {
        label: "Coffee".into(),
        start: chrono::NaiveDate::from_ymd_opt(2025, 1, 10)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .expect("valid start"),
        daily_rate: rate,
    }
}

#[test]
fn test_one_day_at_ten_per_day() {
    let cfg = config(10.0);
    let now = local(2025, 1, 11, 8, 0, 0);

    let state = SavingsCalculator::snapshot(now, &cfg, 0.0).unwrap();

    assert_eq!(state.elapsed, Elapsed::Since(86_400));
    assert_close(state.gross_saved, 10.0);
    assert_eq!(
        state.elapsed.units(),
        Some(TimeUnits {
            days: 1,
            hours: 0,
            minutes: 0,
            seconds: 0
        })
    );
}

#[test]
fn test_one_hour_at_twenty_four_per_day() {
    assert_close(gross_saved(3600, 24.0), 1.0);
}

#[test]
fn test_future_start_reports_zero() {
    let cfg = config(10.0);
    let now = local(2025, 1, 10, 7, 59, 50);

    let state = SavingsCalculator::snapshot(now, &cfg, 3.0).unwrap();

    assert!(state.elapsed.is_future());
    assert_eq!(state.elapsed.units(), None);
    assert_eq!(state.gross_saved, 0.0);
    assert_eq!(state.net_saved, 0.0);
    assert_eq!(state.total_treats, 3.0);
}

#[test]
fn test_negative_elapsed_is_floored() {
    let start = local(2025, 1, 10, 8, 0, 0);
    assert_eq!(elapsed_seconds(start - TimeDelta::milliseconds(1), start), -1);
    assert_eq!(elapsed_seconds(start + TimeDelta::milliseconds(999), start), 0);
    assert_eq!(elapsed_seconds(start, start), 0);
    assert_eq!(gross_saved(-1, 100.0), 0.0);
}

#[test]
fn test_net_is_floored_at_zero() {
    assert_eq!(net_saved(5.0, 7.5), 0.0);
    assert_close(net_saved(5.0, 1.5), 3.5);
}

proptest! {
    #[test]
    fn prop_gross_matches_formula(e in 0i64..10_000_000_000, r in 0.0f64..100_000.0) {
        let expected = e as f64 * r / 86_400.0;
        prop_assert_eq!(gross_saved(e, r), expected);
        prop_assert!(gross_saved(e, r) >= 0.0);
    }

    #[test]
    fn prop_net_is_gross_minus_treats_or_zero(g in 0.0f64..1e9, t in 0.0f64..1e9) {
        let net = net_saved(g, t);
        prop_assert!(net >= 0.0);
        prop_assert_eq!(net, (g - t).max(0.0));
    }

    #[test]
    fn prop_time_units_round_trip(total in 0u64..u32::MAX as u64 * 10) {
        let u = TimeUnits::from_seconds(total);
        prop_assert!(u.hours < 24);
        prop_assert!(u.minutes < 60);
        prop_assert!(u.seconds < 60);
        prop_assert_eq!(u.days * 86_400 + u.hours * 3_600 + u.minutes * 60 + u.seconds, total);
        prop_assert_eq!(u.total_seconds(), total);
    }

    #[test]
    fn prop_elapsed_is_floor_of_millis(ms in -10_000_000_000i64..10_000_000_000) {
        let start = Local.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).single().unwrap();
        let now = start + TimeDelta::milliseconds(ms);
        prop_assert_eq!(elapsed_seconds(now, start), ms.div_euclid(1000));
    }
}
