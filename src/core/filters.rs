use crate::error::MatchError;
use crate::models::{MatchFilters, TalentCandidate};

/// Check whether a candidate passes all active inclusion predicates
///
/// This is Stage 1 of the pipeline and runs before any scoring. A predicate
/// left at its default excludes nobody. Pure function of candidate
/// attributes and configuration.
#[inline]
pub fn is_eligible(candidate: &TalentCandidate, filters: &MatchFilters) -> bool {
    // Minimum vetting score; an absent score counts as 0, so any positive
    // threshold excludes unvetted candidates
    if let Some(min) = filters.min_secondary_score {
        if candidate.vetting() < min {
            return false;
        }
    }

    // Profile completeness
    if filters.require_profile_complete && !candidate.complete() {
        return false;
    }

    // Location: case-insensitive exact match. A candidate without a
    // location cannot match an active location predicate.
    if let Some(wanted) = &filters.location {
        match &candidate.location {
            Some(location) => {
                if location.trim().to_lowercase() != wanted.trim().to_lowercase() {
                    return false;
                }
            }
            None => return false,
        }
    }

    true
}

/// Validate filter configuration
pub fn validate_filters(filters: &MatchFilters) -> Result<(), MatchError> {
    if let Some(min) = filters.min_secondary_score {
        if !(0.0..=100.0).contains(&min) {
            return Err(MatchError::InvalidArgument(format!(
                "min_secondary_score must be within [0, 100], got {}",
                min
            )));
        }
    }

    Ok(())
}
