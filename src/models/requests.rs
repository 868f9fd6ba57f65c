use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{BlendWeights, MatchFilters, TalentCandidate};

/// Request to match talents against a project's required skills
///
/// The caller resolves the project and candidate data before building this;
/// the engine receives already-fetched skill lists, never identifiers to
/// look up.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "project_id", rename = "projectId")]
    pub project_id: String,
    #[serde(alias = "required_skills", rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub candidates: Vec<TalentCandidate>,
    #[serde(default)]
    pub filters: MatchFilters,
    #[validate(range(min = 1))]
    #[serde(default = "default_limit")]
    pub limit: u16,
    #[serde(default)]
    pub weights: Option<BlendWeights>,
}

fn default_limit() -> u16 {
    10
}
