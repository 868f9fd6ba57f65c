use std::collections::BTreeSet;

use crate::error::MatchError;
use crate::models::BlendWeights;

/// Tolerance for the weights-sum-to-one invariant
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Calculate the skill-overlap score (0-100) for one candidate
///
/// Scoring formula:
/// ```text
/// score = round2(100 * |candidate ∩ required| / |required|)
/// ```
/// An empty required set scores 0 for every candidate (never NaN). Returns
/// the score together with the sorted overlap, which feeds the report.
pub fn skill_score(
    candidate: &BTreeSet<String>,
    required: &BTreeSet<String>,
) -> (f64, Vec<String>) {
    if required.is_empty() {
        return (0.0, Vec::new());
    }

    let matched: Vec<String> = candidate.intersection(required).cloned().collect();
    let score = round2(100.0 * matched.len() as f64 / required.len() as f64);

    (score, matched)
}

/// Blend the skill score with the secondary vetting signal
///
/// Weighted sum, clamped to [0, 100] and rounded to 2 decimals. Callers
/// without a vetting signal pass `BlendWeights::skill_only()`, which makes
/// this the identity on the skill score.
#[inline]
pub fn combined_score(skill: f64, secondary: f64, weights: &BlendWeights) -> f64 {
    let blended = skill * weights.skill + secondary * weights.secondary;
    round2(blended.clamp(0.0, 100.0))
}

/// Validate a blend weight set
///
/// Each weight must lie in [0, 1] and the pair must sum to 1 within
/// tolerance, so the combined score stays in [0, 100].
pub fn validate_weights(weights: &BlendWeights) -> Result<(), MatchError> {
    for (name, value) in [("skill", weights.skill), ("secondary", weights.secondary)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(MatchError::InvalidArgument(format!(
                "weight '{}' must be within [0, 1], got {}",
                name, value
            )));
        }
    }

    let sum = weights.skill + weights.secondary;
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(MatchError::InvalidArgument(format!(
            "weights must sum to 1.0, got {}",
            sum
        )));
    }

    Ok(())
}

/// Round half-up to two decimal places
///
/// `f64::round` rounds half away from zero, which is half-up for the
/// non-negative values produced by the scoring pipeline. This is the single
/// rounding rule used everywhere a score is produced.
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize::normalize_skills;

    #[test]
    fn test_full_overlap_scores_100() {
        let candidate = normalize_skills(["python", "sql", "go"]);
        let required = normalize_skills(["Python", "SQL"]);

        let (score, matched) = skill_score(&candidate, &required);

        assert_eq!(score, 100.0);
        assert_eq!(matched, vec!["python", "sql"]);
    }

    #[test]
    fn test_partial_overlap_rounds_to_two_decimals() {
        let candidate = normalize_skills(["python"]);
        let required = normalize_skills(["Python", "SQL", "Go"]);

        let (score, matched) = skill_score(&candidate, &required);

        assert_eq!(score, 33.33);
        assert_eq!(matched, vec!["python"]);
    }

    #[test]
    fn test_empty_required_scores_zero() {
        let candidate = normalize_skills(["python"]);
        let required = normalize_skills(Vec::<String>::new());

        let (score, matched) = skill_score(&candidate, &required);

        assert_eq!(score, 0.0);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        let candidate = normalize_skills(Vec::<String>::new());
        let required = normalize_skills(["python", "sql"]);

        let (score, _) = skill_score(&candidate, &required);

        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_within_valid_range() {
        let required = normalize_skills(["a", "b", "c", "d", "e", "f", "g"]);
        for n in 0..=7 {
            let candidate: std::collections::BTreeSet<String> =
                required.iter().take(n).cloned().collect();
            let (score, _) = skill_score(&candidate, &required);
            assert!(score >= 0.0 && score <= 100.0, "score {} out of range", score);
        }
    }

    #[test]
    fn test_adding_matching_skill_never_decreases_score() {
        let required = normalize_skills(["python", "sql", "go"]);
        let mut candidate = normalize_skills(["python"]);
        let (before, _) = skill_score(&candidate, &required);

        candidate.insert("sql".to_string());
        let (after, _) = skill_score(&candidate, &required);

        assert!(after >= before);
    }

    #[test]
    fn test_combined_score_default_blend() {
        let weights = BlendWeights::default();

        // 0.7 * 100 + 0.3 * 80 = 94
        assert_eq!(combined_score(100.0, 80.0, &weights), 94.0);
        // Missing vetting blends as 0
        assert_eq!(combined_score(100.0, 0.0, &weights), 70.0);
    }

    #[test]
    fn test_combined_score_skill_only() {
        let weights = BlendWeights::skill_only();

        assert_eq!(combined_score(33.33, 95.0, &weights), 33.33);
    }

    #[test]
    fn test_validate_weights() {
        assert!(validate_weights(&BlendWeights::default()).is_ok());
        assert!(validate_weights(&BlendWeights::skill_only()).is_ok());

        let negative = BlendWeights { skill: -0.1, secondary: 1.1 };
        assert!(validate_weights(&negative).is_err());

        let not_normalized = BlendWeights { skill: 0.5, secondary: 0.3 };
        assert!(validate_weights(&not_normalized).is_err());
    }

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(0.005), 0.01);
    }
}
