use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::experience::ExperienceClassification;
use crate::matching::match_tier::MatchClassification;
use crate::matching::skill_gap::SkillGap;
use crate::matching::source::SourceClassification;

/// One candidate compared against one requirement, as fetched by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningInput {
    pub candidate_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub candidate_skills: Vec<String>,
    /// Fractional (0–1) or percentage (0–100).
    pub match_score: f64,
    #[serde(default)]
    pub claimed_years: Option<f64>,
    #[serde(default)]
    pub actual_years: Option<f64>,
    #[serde(default)]
    pub source: String,
}

/// Everything the dashboard needs to render one candidate card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningSummary {
    pub candidate_id: Uuid,
    pub name: String,
    #[serde(rename = "match")]
    pub match_result: MatchClassification,
    pub match_display_class: String,
    pub skill_gap: SkillGap,
    pub skill_coverage: f64,
    pub experience: ExperienceClassification,
    pub source: SourceClassification,
}
