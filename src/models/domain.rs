use serde::{Deserialize, Serialize};

/// Talent candidate as handed in by the surrounding service
///
/// Identifiers are opaque strings resolved by the caller; the engine never
/// looks anything up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentCandidate {
    #[serde(alias = "talent_id", rename = "talentId")]
    pub talent_id: String,
    #[serde(alias = "display_name", rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(alias = "secondary_score", rename = "secondaryScore", default)]
    pub secondary_score: Option<f64>,
    #[serde(alias = "profile_completed", rename = "profileCompleted", default)]
    pub profile_completed: Option<bool>,
    #[serde(default)]
    pub location: Option<String>,
}

impl TalentCandidate {
    /// Helper to get the vetting score as a number, defaulting to 0
    ///
    /// An absent score counts as 0 for both filtering and blending.
    pub fn vetting(&self) -> f64 {
        self.secondary_score.unwrap_or(0.0)
    }

    /// Helper to get profile completeness as a bool, defaulting to false
    pub fn complete(&self) -> bool {
        self.profile_completed.unwrap_or(false)
    }
}

/// Inclusion predicates applied before scoring
///
/// A predicate left at its default is a no-op and excludes nobody.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchFilters {
    #[serde(alias = "min_secondary_score", rename = "minSecondaryScore", default)]
    pub min_secondary_score: Option<f64>,
    #[serde(alias = "require_profile_complete", rename = "requireProfileComplete", default)]
    pub require_profile_complete: bool,
    #[serde(default)]
    pub location: Option<String>,
}

/// Blend weights for the combined score
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlendWeights {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_secondary_weight")]
    pub secondary: f64,
}

impl BlendWeights {
    /// Skill-only scoring, for callers without a vetting signal
    pub fn skill_only() -> Self {
        Self {
            skill: 1.0,
            secondary: 0.0,
        }
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            secondary: default_secondary_weight(),
        }
    }
}

fn default_skill_weight() -> f64 { 0.7 }
fn default_secondary_weight() -> f64 { 0.3 }

/// Scored match result
///
/// `skills` and `matched_skills` are normalized and sorted, so identical
/// requests serialize to identical reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(rename = "talentId")]
    pub talent_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub skills: Vec<String>,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "skillScore")]
    pub skill_score: f64,
    #[serde(rename = "secondaryScore")]
    pub secondary_score: Option<f64>,
    #[serde(rename = "combinedScore")]
    pub combined_score: f64,
}
