use chrono::{Days, NaiveDate, NaiveTime};

use crate::models::{MedicationCheck, MedicationItem};

use super::slots::slots_for;
use super::types::PlannedDose;

/// Longest course expanded into doses. Longer durations are truncated.
pub const MAX_COURSE_DAYS: u32 = 366;

/// Expand a medication with a prescribed duration into its pending doses.
///
/// One dose per slot per day for `duration_days` days from `start` (at most
/// [`MAX_COURSE_DAYS`]), in chronological order. No duration (or zero) means
/// no course.
pub fn plan_course(item: &MedicationItem, start: NaiveDate) -> Vec<PlannedDose> {
    let days = match item.duration_days {
        Some(d) if d > MAX_COURSE_DAYS => {
            tracing::warn!(
                medication_id = %item.id,
                duration_days = d,
                max = MAX_COURSE_DAYS,
                "Course duration truncated"
            );
            MAX_COURSE_DAYS
        }
        Some(d) if d > 0 => d,
        _ => return Vec::new(),
    };

    let mut times: Vec<NaiveTime> = slots_for(item)
        .times
        .iter()
        .filter_map(|t| NaiveTime::parse_from_str(t, "%H:%M").ok())
        .collect();
    // Spread tables wrap past midnight ("00:00" after "20:00").
    times.sort();

    let medication = item.to_ref();
    let mut doses = Vec::with_capacity(days as usize * times.len());
    for offset in 0..days {
        let Some(date) = start.checked_add_days(Days::new(u64::from(offset))) else {
            break;
        };
        for time in &times {
            doses.push(PlannedDose {
                medication: medication.clone(),
                check: MedicationCheck::missed(date.and_time(*time)),
            });
        }
    }
    doses
}

/// Courses for every medication, merged chronologically.
/// Doses due at the same instant keep input medication order.
pub fn plan_courses(items: &[MedicationItem], start: NaiveDate) -> Vec<PlannedDose> {
    let mut doses: Vec<PlannedDose> = items
        .iter()
        .flat_map(|item| plan_course(item, start))
        .collect();
    doses.sort_by_key(|d| d.check.scheduled_at);

    tracing::debug!(
        medications = items.len(),
        doses = doses.len(),
        "Planned medication courses"
    );
    doses
}
