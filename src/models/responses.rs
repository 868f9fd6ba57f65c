use serde::{Deserialize, Serialize};

use crate::models::domain::ScoredMatch;

/// Final report for one match request
///
/// Immutable once built. Order of `matches` is exactly the ranker's output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    #[serde(rename = "projectId")]
    pub project_id: String,
    pub matches: Vec<ScoredMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "eligibleCandidates")]
    pub eligible_candidates: usize,
    /// Warning signal: the project demanded no skills, so every candidate
    /// scored 0 on skill overlap.
    #[serde(rename = "emptyRequiredSkills")]
    pub empty_required_skills: bool,
}
