//! Screening summary — runs every classifier for one candidate and ranks a
//! batch of candidates for the dashboard list.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::matching::experience::{classify_experience_with, DEFAULT_TOLERANCE_YEARS};
use crate::matching::match_tier::{classify_match_with, MatchThresholds};
use crate::matching::skill_gap::compute_skill_gap;
use crate::matching::source::classify_source;
use crate::models::screening::{ScreeningInput, ScreeningSummary};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    pub thresholds: MatchThresholds,
    pub experience_tolerance_years: f64,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            thresholds: MatchThresholds::default(),
            experience_tolerance_years: DEFAULT_TOLERANCE_YEARS,
        }
    }
}

pub fn screen_candidate(input: &ScreeningInput, config: &ScreeningConfig) -> ScreeningSummary {
    let match_result = classify_match_with(input.match_score, &config.thresholds);
    let skill_gap = compute_skill_gap(&input.required_skills, &input.candidate_skills);
    let experience = classify_experience_with(
        input.claimed_years,
        input.actual_years,
        config.experience_tolerance_years,
    );
    let source = classify_source(&input.source);

    if source.tag.is_none() && !input.source.is_empty() {
        warn!(
            "Candidate {} has unrecognized source tag '{}'",
            input.candidate_id, input.source
        );
    }

    debug!(
        candidate_id = %input.candidate_id,
        percent = match_result.percent,
        tier = %match_result.tier,
        missing = skill_gap.missing.len(),
        flagged = experience.flagged,
        "Screened candidate"
    );

    ScreeningSummary {
        candidate_id: input.candidate_id,
        name: input.name.clone(),
        match_display_class: match_result.tier.display_class().to_string(),
        match_result,
        skill_coverage: skill_gap.coverage(),
        skill_gap,
        experience,
        source,
    }
}

/// Screens every input and orders by percent (highest first), then name.
pub fn screen_batch(inputs: &[ScreeningInput], config: &ScreeningConfig) -> Vec<ScreeningSummary> {
    let mut summaries: Vec<ScreeningSummary> = inputs
        .iter()
        .map(|input| screen_candidate(input, config))
        .collect();

    summaries.sort_by(|a, b| {
        b.match_result
            .percent
            .cmp(&a.match_result.percent)
            .then_with(|| a.name.cmp(&b.name))
    });

    let flagged = summaries.iter().filter(|s| s.experience.flagged).count();
    info!(
        "Screened {} candidates ({} with flagged experience)",
        summaries.len(),
        flagged
    );

    summaries
}
