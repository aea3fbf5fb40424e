use crate::clock::{Clock, FixedClock};
use crate::models::{AdherenceTier, MedicationCheck};

use super::aggregates::{calculate_adherence, calculate_adherence_by_period, calculate_daily_adherence};
use super::types::{AdherenceGrade, AdherenceResult};

/// Trailing windows reported alongside the overall figure.
pub const REPORT_WINDOWS: [u32; 3] = [7, 14, 30];

/// Compute every adherence figure for one patient's checks.
///
/// All three windows are measured from a single reading of `clock`, so a
/// report never straddles two different "now"s.
pub fn build_adherence_report(checks: &[MedicationCheck], clock: &dyn Clock) -> AdherenceResult {
    let snapshot = FixedClock(clock.now());
    let [last_7_days, last_14_days, last_30_days] =
        REPORT_WINDOWS.map(|days| calculate_adherence_by_period(checks, days, &snapshot));

    let overall = calculate_adherence(checks);
    // Percentages from calculate_adherence are always within 0..=100.
    let grade: Option<AdherenceGrade> = overall.map(|p| AdherenceTier::for_percentage(p).into());

    let result = AdherenceResult {
        overall,
        last_7_days,
        last_14_days,
        last_30_days,
        grade,
        daily: calculate_daily_adherence(checks),
    };

    tracing::debug!(
        checks = checks.len(),
        days = result.daily.len(),
        overall = ?result.overall,
        "Built adherence report"
    );

    result
}
