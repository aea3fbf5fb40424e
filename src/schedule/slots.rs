use std::collections::BTreeSet;

use crate::models::{MedicationItem, SlotSource};

use super::frequency::parse_frequency;
use super::types::{MedicationSlots, ScheduleSlot};

/// Slot used when a frequency cannot be read.
pub const FALLBACK_TIME: &str = "09:00";

/// First dose hour for the evenly spaced (5+ per day) pattern.
const SPREAD_START_HOUR: u32 = 8;

/// Canonical dosing clock times for a times-per-day count.
///
/// 1-4 come from a fixed table; 5 and above are spread from 08:00 at
/// `24 / n` whole hours, wrapping past midnight. Above 24 the interval floors
/// to zero, so all `n` entries are "08:00". All values are zero-padded 24h
/// "HH:MM" so they sort lexicographically. Zero yields no times.
pub fn default_times_for_frequency(times_per_day: u32) -> Vec<String> {
    let fixed: &[&str] = match times_per_day {
        0 => &[],
        1 => &["09:00"],
        2 => &["09:00", "18:00"],
        3 => &["09:00", "12:00", "18:00"],
        4 => &["08:00", "12:00", "17:00", "21:00"],
        n => return spread_times(n),
    };
    fixed.iter().map(|t| t.to_string()).collect()
}

fn spread_times(times_per_day: u32) -> Vec<String> {
    let interval = 24 / times_per_day;
    (0..times_per_day)
        .map(|i| format!("{:02}:00", (SPREAD_START_HOUR + i * interval) % 24))
        .collect()
}

/// Distinct slot times for a count. Equal to [`default_times_for_frequency`]
/// up to 24 per day; above that every dose collapses onto 08:00, so only
/// that one time is materialised however large the count.
fn distinct_times(times_per_day: u32) -> Vec<String> {
    if times_per_day > 24 {
        return vec![format!("{SPREAD_START_HOUR:02}:00")];
    }
    default_times_for_frequency(times_per_day)
}

/// Effective times-per-day: the parsed count, or 1 when unreadable.
pub fn times_per_day(item: &MedicationItem) -> u32 {
    slots_for(item).times_per_day
}

/// Resolve the slot list for one medication. `times` holds each clock time
/// once; `times_per_day` keeps the parsed count.
pub fn slots_for(item: &MedicationItem) -> MedicationSlots {
    match parse_frequency(item.frequency.as_deref()) {
        Some(n) => MedicationSlots {
            times_per_day: n,
            times: distinct_times(n),
            source: SlotSource::Parsed,
        },
        None => {
            tracing::debug!(
                medication_id = %item.id,
                frequency = ?item.frequency,
                "Unrecognised frequency, using fallback slot"
            );
            MedicationSlots {
                times_per_day: 1,
                times: vec![FALLBACK_TIME.to_string()],
                source: SlotSource::Fallback,
            }
        }
    }
}

/// Merge every medication into one schedule keyed by clock time.
///
/// Slots come out in ascending time order with no duplicate times; inside a
/// slot medications keep their input order. A medication whose frequency
/// cannot be read still appears, at [`FALLBACK_TIME`] only.
pub fn generate_medication_schedule(medications: &[MedicationItem]) -> Vec<ScheduleSlot> {
    let resolved: Vec<(&MedicationItem, MedicationSlots)> = medications
        .iter()
        .map(|item| (item, slots_for(item)))
        .collect();

    // "HH:MM" strings are zero-padded 24h, so lexicographic order is chronological.
    let all_times: BTreeSet<&str> = resolved
        .iter()
        .flat_map(|(_, slots)| slots.times.iter().map(String::as_str))
        .collect();

    let mut schedule = Vec::with_capacity(all_times.len());
    for time in all_times {
        let due: Vec<_> = resolved
            .iter()
            .filter(|(_, slots)| slots.times.iter().any(|t| t == time))
            .map(|(item, _)| item.to_ref())
            .collect();

        if !due.is_empty() {
            schedule.push(ScheduleSlot {
                time: time.to_string(),
                medications: due,
            });
        }
    }

    tracing::debug!(
        medications = medications.len(),
        slots = schedule.len(),
        "Generated medication schedule"
    );

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn med(id: &str, frequency: Option<&str>) -> MedicationItem {
        MedicationItem::new(id, format!("Drug {id}"), "1T", frequency)
    }

    fn slot_ids(slot: &ScheduleSlot) -> Vec<&str> {
        slot.medications.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn fixed_table_values() {
        assert_eq!(default_times_for_frequency(1), vec!["09:00"]);
        assert_eq!(default_times_for_frequency(2), vec!["09:00", "18:00"]);
        assert_eq!(default_times_for_frequency(3), vec!["09:00", "12:00", "18:00"]);
        assert_eq!(
            default_times_for_frequency(4),
            vec!["08:00", "12:00", "17:00", "21:00"]
        );
    }

    #[test]
    fn five_per_day_spreads_four_hours_from_eight() {
        let times = default_times_for_frequency(5);
        assert_eq!(times, vec!["08:00", "12:00", "16:00", "20:00", "00:00"]);
        let distinct: BTreeSet<_> = times.iter().collect();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn six_per_day_wraps_past_midnight() {
        assert_eq!(
            default_times_for_frequency(6),
            vec!["08:00", "12:00", "16:00", "20:00", "00:00", "04:00"]
        );
    }

    #[test]
    fn seven_per_day_floors_interval() {
        // 24 / 7 = 3
        assert_eq!(
            default_times_for_frequency(7),
            vec!["08:00", "11:00", "14:00", "17:00", "20:00", "23:00", "02:00"]
        );
    }

    #[test]
    fn hourly_stays_zero_padded_and_distinct() {
        let times = default_times_for_frequency(24);
        assert_eq!(times.len(), 24);
        assert_eq!(times.iter().collect::<BTreeSet<_>>().len(), 24);
        assert!(times.iter().all(|t| t.len() == 5 && t.ends_with(":00")));
    }

    #[test]
    fn above_hourly_collapses_onto_eight() {
        // 24 / 25 floors to zero.
        let times = default_times_for_frequency(25);
        assert_eq!(times.len(), 25);
        assert!(times.iter().all(|t| t == "08:00"));
    }

    #[test]
    fn above_hourly_schedules_a_single_eight_o_clock_slot() {
        let meds = vec![med("a", Some("1일 25회"))];
        let schedule = generate_medication_schedule(&meds);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].time, "08:00");
        assert_eq!(slot_ids(&schedule[0]), vec!["a"]);

        let slots = slots_for(&meds[0]);
        assert_eq!(slots.times_per_day, 25);
        assert_eq!(slots.times, vec!["08:00"]);
    }

    #[test]
    fn huge_count_resolves_without_materialising_every_dose() {
        let slots = slots_for(&med("a", Some("하루 4000000000번")));
        assert_eq!(slots.times_per_day, 4_000_000_000);
        assert_eq!(slots.times, vec!["08:00"]);
        assert_eq!(slots.source, SlotSource::Parsed);
    }

    #[test]
    fn zero_has_no_times() {
        assert!(default_times_for_frequency(0).is_empty());
    }

    #[test]
    fn empty_input_gives_empty_schedule() {
        assert!(generate_medication_schedule(&[]).is_empty());
    }

    #[test]
    fn merges_shared_slots() {
        let meds = vec![
            med("a", Some("1일 3회")),
            med("b", Some("1일 2회")),
            med("c", Some("1일 3회")),
        ];
        let schedule = generate_medication_schedule(&meds);

        let times: Vec<&str> = schedule.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, vec!["09:00", "12:00", "18:00"]);
        assert_eq!(slot_ids(&schedule[0]), vec!["a", "b", "c"]);
        assert_eq!(slot_ids(&schedule[1]), vec!["a", "c"]);
        assert_eq!(slot_ids(&schedule[2]), vec!["a", "b", "c"]);
    }

    #[test]
    fn unparseable_frequency_lands_at_nine_only() {
        let meds = vec![med("x", Some("불명확")), med("y", None)];
        let schedule = generate_medication_schedule(&meds);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].time, FALLBACK_TIME);
        assert_eq!(slot_ids(&schedule[0]), vec!["x", "y"]);
    }

    #[test]
    fn every_medication_appears_somewhere() {
        let meds = vec![
            med("a", Some("하루 4번")),
            med("b", Some("??")),
            med("c", Some("6회/일")),
            med("d", Some("qd")),
        ];
        let schedule = generate_medication_schedule(&meds);
        for m in &meds {
            assert!(
                schedule
                    .iter()
                    .any(|s| s.medications.iter().any(|r| r.id == m.id)),
                "{} missing from schedule",
                m.id
            );
        }
    }

    #[test]
    fn slots_are_sorted_and_unique() {
        let meds = vec![
            med("a", Some("5회/일")),
            med("b", Some("하루 4회")),
            med("c", Some("1일 1회")),
        ];
        let schedule = generate_medication_schedule(&meds);
        let times: Vec<&str> = schedule.iter().map(|s| s.time.as_str()).collect();
        let mut sorted = times.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(times, sorted);
        assert_eq!(times.first(), Some(&"00:00"));
        assert!(schedule.iter().all(|s| !s.medications.is_empty()));
    }

    #[test]
    fn schedule_is_idempotent() {
        let meds = vec![
            med("a", Some("1일 3회")),
            med("b", Some("twice daily")),
            med("c", None),
        ];
        let first = serde_json::to_string(&generate_medication_schedule(&meds)).unwrap();
        let second = serde_json::to_string(&generate_medication_schedule(&meds)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn slots_for_reports_source() {
        let parsed = slots_for(&med("a", Some("1일 2회")));
        assert_eq!(parsed.source, SlotSource::Parsed);
        assert_eq!(parsed.times_per_day, 2);

        let fallback = slots_for(&med("b", Some("")));
        assert_eq!(fallback.source, SlotSource::Fallback);
        assert_eq!(fallback.times, vec![FALLBACK_TIME]);
        assert_eq!(times_per_day(&med("b", None)), 1);
    }

    #[test]
    fn schedule_wire_shape() {
        let meds = vec![MedicationItem::new("m1", "타이레놀", "500mg", Some("1일 1회"))];
        let json = serde_json::to_value(generate_medication_schedule(&meds)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "time": "09:00",
                "medications": [{ "id": "m1", "name": "타이레놀", "dose": "500mg" }]
            }])
        );
    }
}
