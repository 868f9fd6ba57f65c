use crate::error::MatchError;
use crate::models::ScoredMatch;

/// Order scored candidates by descending combined score and truncate
///
/// The comparator looks at the combined score only; because the sort is
/// stable, candidates with equal scores keep their input relative order.
/// That tie-break is part of the contract, not an implementation accident.
pub fn rank(
    mut candidates: Vec<ScoredMatch>,
    limit: usize,
) -> Result<Vec<ScoredMatch>, MatchError> {
    if limit == 0 {
        return Err(MatchError::InvalidArgument(
            "limit must be greater than zero".to_string(),
        ));
    }

    // slice::sort_by is stable; no secondary comparator may disturb ties
    candidates.sort_by(|a, b| {
        b.combined_score
            .partial_cmp(&a.combined_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    candidates.truncate(limit);

    Ok(candidates)
}
