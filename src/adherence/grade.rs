use crate::models::AdherenceTier;

use super::types::AdherenceGrade;
use super::AdherenceError;

/// Lower bounds (inclusive), evaluated top-down. Anything below the last
/// bound is `Poor`.
const TIER_THRESHOLDS: [(f64, AdherenceTier); 3] = [
    (90.0, AdherenceTier::Excellent),
    (70.0, AdherenceTier::Good),
    (50.0, AdherenceTier::Fair),
];

impl AdherenceTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "우수",
            Self::Good => "양호",
            Self::Fair => "보통",
            Self::Poor => "부족",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "매우 잘 지키고 계십니다!",
            Self::Good => "잘 지키고 계십니다.",
            Self::Fair => "조금 더 노력이 필요합니다.",
            Self::Poor => "복약 관리가 필요합니다.",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Excellent => "#10B981",
            Self::Good => "#3B82F6",
            Self::Fair => "#F59E0B",
            Self::Poor => "#EF4444",
        }
    }

    pub fn for_percentage(percentage: f64) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(floor, _)| percentage >= *floor)
            .map(|(_, tier)| *tier)
            .unwrap_or(Self::Poor)
    }
}

impl From<AdherenceTier> for AdherenceGrade {
    fn from(tier: AdherenceTier) -> Self {
        Self {
            tier,
            label: tier.label().into(),
            description: tier.description().into(),
            color: tier.color().into(),
        }
    }
}

/// Classify a percentage into a grade.
///
/// Callers branch on "no data" before getting here; a NaN or out-of-range
/// value is rejected rather than silently graded.
pub fn adherence_grade(percentage: f64) -> Result<AdherenceGrade, AdherenceError> {
    if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
        tracing::warn!(percentage, "Rejected adherence percentage for grading");
        return Err(AdherenceError::InvalidPercentage(percentage));
    }
    Ok(AdherenceTier::for_percentage(percentage).into())
}
