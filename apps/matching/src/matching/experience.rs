//! Experience-gap classifier. Flags candidates whose claimed years exceed the
//! verified years by more than the tolerance.

use serde::{Deserialize, Serialize};

/// Claimed − actual must exceed this many years to be flagged.
pub const DEFAULT_TOLERANCE_YEARS: f64 = 1.0;

pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceClassification {
    pub label: String,
    pub flagged: bool,
    /// claimed − actual; present only when both values are known.
    pub gap: Option<f64>,
}

pub fn classify_experience(claimed: Option<f64>, actual: Option<f64>) -> ExperienceClassification {
    classify_experience_with(claimed, actual, DEFAULT_TOLERANCE_YEARS)
}

pub fn classify_experience_with(
    claimed: Option<f64>,
    actual: Option<f64>,
    tolerance_years: f64,
) -> ExperienceClassification {
    match (claimed, actual) {
        (_, None) => ExperienceClassification {
            label: UNKNOWN_LABEL.to_string(),
            flagged: false,
            gap: None,
        },
        (None, Some(actual)) => ExperienceClassification {
            label: format!("{actual:.1} yrs"),
            flagged: false,
            gap: None,
        },
        (Some(claimed), Some(actual)) => {
            let gap = claimed - actual;
            ExperienceClassification {
                label: format!("{actual:.1} yrs (claimed {claimed:.1})"),
                flagged: gap > tolerance_years,
                gap: Some(gap),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_year_inflation_flagged() {
        let c = classify_experience(Some(5.0), Some(3.0));
        assert!(c.flagged);
        assert_eq!(c.gap, Some(2.0));
        assert_eq!(c.label, "3.0 yrs (claimed 5.0)");
    }

    #[test]
    fn test_one_year_gap_not_flagged() {
        let c = classify_experience(Some(5.0), Some(4.0));
        assert!(!c.flagged);
        assert_eq!(c.gap, Some(1.0));
    }

    #[test]
    fn test_just_over_tolerance_flagged() {
        assert!(classify_experience(Some(5.5), Some(4.0)).flagged);
    }

    #[test]
    fn test_claimed_absent() {
        let c = classify_experience(None, Some(3.0));
        assert!(!c.flagged);
        assert_eq!(c.label, "3.0 yrs");
        assert_eq!(c.gap, None);
    }

    #[test]
    fn test_actual_absent_is_unknown() {
        let c = classify_experience(Some(10.0), None);
        assert!(!c.flagged);
        assert_eq!(c.label, UNKNOWN_LABEL);
        assert_eq!(c.gap, None);

        assert_eq!(classify_experience(None, None).label, UNKNOWN_LABEL);
    }

    #[test]
    fn test_understated_experience_not_flagged() {
        let c = classify_experience(Some(2.0), Some(6.0));
        assert!(!c.flagged);
        assert_eq!(c.gap, Some(-4.0));
    }

    #[test]
    fn test_label_one_decimal() {
        let c = classify_experience(Some(7.26), Some(3.04));
        assert_eq!(c.label, "3.0 yrs (claimed 7.3)");
    }

    #[test]
    fn test_custom_tolerance() {
        assert!(classify_experience_with(Some(4.5), Some(4.0), 0.25).flagged);
        assert!(!classify_experience_with(Some(6.0), Some(3.0), 3.0).flagged);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            classify_experience(Some(5.0), Some(3.0)),
            classify_experience(Some(5.0), Some(3.0))
        );
    }
}
