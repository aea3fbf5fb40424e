use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::AdherenceTier;

/// Qualitative grade shown next to an adherence percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceGrade {
    pub tier: AdherenceTier,
    pub label: String,
    pub description: String,
    /// Hex colour used by the summary view.
    pub color: String,
}

/// Scheduled vs. taken counts for one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTally {
    pub scheduled: usize,
    pub taken: usize,
}

/// Everything the clinician summary renders for one patient.
///
/// `None` percentages mean "no checks in range", never 0%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdherenceResult {
    pub overall: Option<f64>,
    #[serde(rename = "last7Days")]
    pub last_7_days: Option<f64>,
    #[serde(rename = "last14Days")]
    pub last_14_days: Option<f64>,
    #[serde(rename = "last30Days")]
    pub last_30_days: Option<f64>,
    /// Present exactly when `overall` is.
    pub grade: Option<AdherenceGrade>,
    pub daily: BTreeMap<NaiveDate, f64>,
}
