//! Skill-gap calculator — case-insensitive set difference between a
//! requirement's skill list and a candidate's skill list.
//!
//! Skills are compared after trimming and lower-casing. `str::to_lowercase`
//! applies the Unicode default case mapping, so results do not depend on the
//! host locale. All output lists are sorted lexicographically.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Result of comparing required skills against a candidate's skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    /// Required skills the candidate does not list.
    pub missing: Vec<String>,
    /// Candidate skills the requirement does not ask for.
    pub extra: Vec<String>,
    /// Skills present on both sides.
    pub matched: Vec<String>,
}

impl SkillGap {
    /// Fraction of the required skills the candidate covers, in [0, 1].
    /// An empty requirement is fully covered.
    pub fn coverage(&self) -> f64 {
        let required = self.matched.len() + self.missing.len();
        if required == 0 {
            return 1.0;
        }
        self.matched.len() as f64 / required as f64
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Normalizes a skill list into a lower-cased, deduplicated, ordered set.
/// Blank entries are dropped.
pub fn normalize_skills<S: AsRef<str>>(skills: &[S]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Computes `missing = required − candidate` and `extra = candidate − required`
/// over the normalized skill sets.
pub fn compute_skill_gap<R, C>(required: &[R], candidate: &[C]) -> SkillGap
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    let required_set = normalize_skills(required);
    let candidate_set = normalize_skills(candidate);

    SkillGap {
        missing: required_set.difference(&candidate_set).cloned().collect(),
        extra: candidate_set.difference(&required_set).cloned().collect(),
        matched: required_set.intersection(&candidate_set).cloned().collect(),
    }
}
