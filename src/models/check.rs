use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One expected dose and whether the patient confirmed it.
///
/// Timestamps are patient-local; the calendar day of `scheduled_at` is the
/// day the dose counts towards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationCheck {
    pub scheduled_at: NaiveDateTime,
    pub is_taken: bool,
    pub taken_at: Option<NaiveDateTime>,
}

impl MedicationCheck {
    pub fn taken(scheduled_at: NaiveDateTime, taken_at: Option<NaiveDateTime>) -> Self {
        Self {
            scheduled_at,
            is_taken: true,
            taken_at,
        }
    }

    pub fn missed(scheduled_at: NaiveDateTime) -> Self {
        Self {
            scheduled_at,
            is_taken: false,
            taken_at: None,
        }
    }

    pub fn scheduled_date(&self) -> NaiveDate {
        self.scheduled_at.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_iso_timestamps() {
        let json = r#"{
            "scheduledAt": "2025-01-15T09:00:00",
            "isTaken": true,
            "takenAt": "2025-01-15T09:12:00"
        }"#;
        let check: MedicationCheck = serde_json::from_str(json).unwrap();
        assert!(check.is_taken);
        assert_eq!(check.scheduled_date().to_string(), "2025-01-15");
        assert!(check.taken_at.is_some());
    }

    #[test]
    fn late_evening_dose_stays_on_its_day() {
        let at = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        assert_eq!(MedicationCheck::missed(at).scheduled_date().to_string(), "2025-01-15");
    }
}
