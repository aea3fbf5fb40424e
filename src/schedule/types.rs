use serde::{Deserialize, Serialize};

use crate::models::{MedicationCheck, MedicationRef, SlotSource};

/// One clock time and every medication due at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Zero-padded 24h "HH:MM".
    pub time: String,
    pub medications: Vec<MedicationRef>,
}

/// The slot list resolved for a single medication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicationSlots {
    pub times_per_day: u32,
    pub times: Vec<String>,
    pub source: SlotSource,
}

/// A pending dose produced by expanding a medication's course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedDose {
    pub medication: MedicationRef,
    pub check: MedicationCheck,
}
