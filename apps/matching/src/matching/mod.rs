// Candidate/requirement matching and badge classification.
// Every function here is pure: the caller fetches the data, we classify it.

pub mod experience;
pub mod match_tier;
pub mod skill_gap;
pub mod source;
pub mod summary;

pub use experience::{classify_experience, ExperienceClassification};
pub use match_tier::{classify_match, MatchClassification, MatchThresholds, MatchTier};
pub use skill_gap::{compute_skill_gap, SkillGap};
pub use source::{classify_source, SourceClassification, SourceTag};
pub use summary::{screen_batch, screen_candidate, ScreeningConfig};
