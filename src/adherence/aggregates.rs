use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::clock::Clock;
use crate::config::{EngineSettings, DEFAULT_PERIOD_DAYS};
use crate::models::MedicationCheck;

use super::types::DayTally;

/// Percentage rounded half-up to one decimal place.
fn percentage(taken: usize, scheduled: usize) -> f64 {
    let raw = taken as f64 / scheduled as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Counts taken/scheduled in one pass. `None` when nothing was scheduled.
fn adherence_of<'a>(checks: impl IntoIterator<Item = &'a MedicationCheck>) -> Option<f64> {
    let (taken, scheduled) = checks.into_iter().fold((0usize, 0usize), |(taken, total), c| {
        (taken + usize::from(c.is_taken), total + 1)
    });
    (scheduled > 0).then(|| percentage(taken, scheduled))
}

/// Share of checks marked taken, or `None` when there are no checks.
pub fn calculate_adherence(checks: &[MedicationCheck]) -> Option<f64> {
    adherence_of(checks)
}

/// Adherence over the trailing `days` up to the clock's "now", inclusive on
/// both ends. Checks scheduled after "now" are outside the window.
pub fn calculate_adherence_by_period(
    checks: &[MedicationCheck],
    days: u32,
    clock: &dyn Clock,
) -> Option<f64> {
    let now = clock.now();
    adherence_of(checks.iter().filter(|c| in_period(c.scheduled_at, now, days)))
}

/// Period adherence over the default trailing week.
pub fn calculate_recent_adherence(checks: &[MedicationCheck], clock: &dyn Clock) -> Option<f64> {
    calculate_adherence_by_period(checks, DEFAULT_PERIOD_DAYS, clock)
}

/// Period adherence over the window configured in `settings`.
pub fn calculate_configured_adherence(
    checks: &[MedicationCheck],
    settings: &EngineSettings,
    clock: &dyn Clock,
) -> Option<f64> {
    calculate_adherence_by_period(checks, settings.default_period_days, clock)
}

fn in_period(at: NaiveDateTime, now: NaiveDateTime, days: u32) -> bool {
    let start = now
        .checked_sub_signed(TimeDelta::days(i64::from(days)))
        .unwrap_or(NaiveDateTime::MIN);
    at >= start && at <= now
}

/// Scheduled/taken counts per calendar day of `scheduled_at`.
/// Every check lands in exactly one bucket.
pub fn daily_tallies(checks: &[MedicationCheck]) -> BTreeMap<NaiveDate, DayTally> {
    let mut tallies: BTreeMap<NaiveDate, DayTally> = BTreeMap::new();
    for check in checks {
        let tally = tallies.entry(check.scheduled_date()).or_default();
        tally.scheduled += 1;
        if check.is_taken {
            tally.taken += 1;
        }
    }
    tallies
}

/// Per-day adherence percentage. Empty input gives an empty map.
pub fn calculate_daily_adherence(checks: &[MedicationCheck]) -> BTreeMap<NaiveDate, f64> {
    daily_tallies(checks)
        .into_iter()
        .map(|(day, tally)| (day, percentage(tally.taken, tally.scheduled)))
        .collect()
}
