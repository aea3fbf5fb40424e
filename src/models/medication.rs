use serde::{Deserialize, Serialize};

/// A prescribed medication as handed over by the ingestion pipeline.
///
/// `frequency` is the raw text read off the prescription; it may be missing
/// or unreadable, in which case scheduling falls back to a single slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationItem {
    pub id: String,
    pub name: String,
    pub dose: String,
    pub frequency: Option<String>,
    pub duration_days: Option<u32>,
}

impl MedicationItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        dose: impl Into<String>,
        frequency: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dose: dose.into(),
            frequency: frequency.map(str::to_owned),
            duration_days: None,
        }
    }

    pub fn with_duration(mut self, days: u32) -> Self {
        self.duration_days = Some(days);
        self
    }

    /// The slice of this item a time slot carries.
    pub fn to_ref(&self) -> MedicationRef {
        MedicationRef {
            id: self.id.clone(),
            name: self.name.clone(),
            dose: self.dose.clone(),
        }
    }
}

/// Medication entry inside a schedule slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationRef {
    pub id: String,
    pub name: String,
    pub dose: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_payload() {
        let json = r#"{
            "id": "m1",
            "name": "타이레놀",
            "dose": "500mg",
            "frequency": "1일 3회",
            "durationDays": 5
        }"#;
        let item: MedicationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.frequency.as_deref(), Some("1일 3회"));
        assert_eq!(item.duration_days, Some(5));
    }

    #[test]
    fn null_frequency_is_accepted() {
        let json = r#"{"id":"m2","name":"A","dose":"1T","frequency":null,"durationDays":null}"#;
        let item: MedicationItem = serde_json::from_str(json).unwrap();
        assert!(item.frequency.is_none());
        assert!(item.duration_days.is_none());
    }

    #[test]
    fn to_ref_copies_identity_fields() {
        let item = MedicationItem::new("m3", "Metformin", "500mg", Some("bid")).with_duration(30);
        let r = item.to_ref();
        assert_eq!(r.id, "m3");
        assert_eq!(r.name, "Metformin");
        assert_eq!(r.dose, "500mg");
    }
}
