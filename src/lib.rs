//! Medication scheduling and adherence engine.
//!
//! Two pure, synchronous halves:
//! - [`schedule`] turns prescription frequency text ("1일 3회", "하루 2번")
//!   into canonical dosing clock times and merges medications per slot.
//! - [`adherence`] turns dose-check events into overall, trailing-window and
//!   per-day adherence percentages plus a qualitative grade.
//!
//! Nothing here performs I/O except settings loading in [`config`]; the
//! only environmental input to the calculations is the [`clock::Clock`]
//! passed to period adherence.

pub mod adherence;
pub mod clock;
pub mod config;
pub mod logging;
pub mod models;
pub mod schedule;

pub use adherence::{
    adherence_grade, build_adherence_report, calculate_adherence, calculate_adherence_by_period,
    calculate_daily_adherence, AdherenceError, AdherenceGrade, AdherenceResult,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use models::{AdherenceTier, MedicationCheck, MedicationItem, MedicationRef};
pub use schedule::{
    default_times_for_frequency, generate_medication_schedule, parse_frequency, ScheduleSlot,
};
