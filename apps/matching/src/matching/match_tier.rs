//! Match classifier — normalizes a raw match score to an integer percentage
//! and buckets it into a badge tier.
//!
//! Scores ≤ 1 are fractional and scaled ×100, including exactly `1.0`
//! (read as 100%, never as 1%). Out-of-range scores are not clamped.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HIGH_THRESHOLD: i64 = 75;
pub const DEFAULT_MEDIUM_THRESHOLD: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::High => "high",
            MatchTier::Medium => "medium",
            MatchTier::Low => "low",
        }
    }

    /// Badge color class used by the dashboard.
    pub fn display_class(&self) -> &'static str {
        match self {
            MatchTier::High => "success",
            MatchTier::Medium => "warning",
            MatchTier::Low => "danger",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum rounded percentages for the `high` and `medium` tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchThresholds {
    pub high: i64,
    pub medium: i64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_THRESHOLD,
            medium: DEFAULT_MEDIUM_THRESHOLD,
        }
    }
}

impl MatchThresholds {
    pub fn tier_for(&self, percent: i64) -> MatchTier {
        match percent {
            p if p >= self.high => MatchTier::High,
            p if p >= self.medium => MatchTier::Medium,
            _ => MatchTier::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchClassification {
    pub percent: i64,
    pub tier: MatchTier,
}

/// Scales a raw score to a rounded percentage. Rounds half away from zero.
/// `NaN` maps to 0; infinities saturate.
pub fn normalize_score(score: f64) -> i64 {
    let scaled = if score <= 1.0 { score * 100.0 } else { score };
    scaled.round() as i64
}

/// Classifies with the default 75 / 50 thresholds.
pub fn classify_match(score: f64) -> MatchClassification {
    classify_match_with(score, &MatchThresholds::default())
}

pub fn classify_match_with(score: f64, thresholds: &MatchThresholds) -> MatchClassification {
    let percent = normalize_score(score);
    MatchClassification {
        percent,
        tier: thresholds.tier_for(percent),
    }
}
