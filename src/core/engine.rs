use validator::Validate;

use crate::config::Settings;
use crate::core::{
    filters::{is_eligible, validate_filters},
    normalize::normalize_skills,
    ranker::rank,
    scoring::{combined_score, skill_score, validate_weights},
};
use crate::error::MatchError;
use crate::models::{BlendWeights, MatchReport, MatchRequest, ScoredMatch};

/// Match engine - scores and ranks talents against a project's skills
///
/// # Pipeline Stages
/// 1. Eligibility filtering
/// 2. Skill set normalization
/// 3. Skill overlap and blended scoring
/// 4. Ranking and truncation
///
/// Stateless between requests; safe to clone and share across threads.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    weights: BlendWeights,
}

impl MatchEngine {
    /// Create an engine with a validated default weight set
    pub fn new(weights: BlendWeights) -> Result<Self, MatchError> {
        validate_weights(&weights)?;
        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: BlendWeights::default(),
        }
    }

    /// Build an engine from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self, MatchError> {
        Self::new(BlendWeights {
            skill: settings.scoring.weights.skill,
            secondary: settings.scoring.weights.secondary,
        })
    }

    /// Run the full matching pipeline for one request
    ///
    /// # Arguments
    /// * `request` - project skills, candidate list, filters, limit, and an
    ///   optional per-request weight override
    ///
    /// # Returns
    /// A MatchReport with candidates ranked by descending combined score,
    /// truncated to the requested limit. Deterministic: identical requests
    /// produce identical reports.
    pub fn find_matches(&self, request: &MatchRequest) -> Result<MatchReport, MatchError> {
        request.validate()?;
        validate_filters(&request.filters)?;

        // Resolve the weight set once, before scoring; a single request is
        // never split across inconsistent weight sets
        let weights = match request.weights {
            Some(weights) => {
                validate_weights(&weights)?;
                weights
            }
            None => self.weights,
        };

        let required = normalize_skills(&request.required_skills);
        let empty_required_skills = required.is_empty();
        if empty_required_skills {
            tracing::debug!(
                "Project {} has no required skills; all skill scores are 0",
                request.project_id
            );
        }

        let total_candidates = request.candidates.len();

        let scored: Vec<ScoredMatch> = request
            .candidates
            .iter()
            // Stage 1: eligibility filter, before any scoring work
            .filter(|candidate| is_eligible(candidate, &request.filters))
            // Stages 2 & 3: normalize and score
            .map(|candidate| {
                let skills = normalize_skills(&candidate.skills);
                let (score, matched_skills) = skill_score(&skills, &required);
                let combined = combined_score(score, candidate.vetting(), &weights);

                ScoredMatch {
                    talent_id: candidate.talent_id.clone(),
                    display_name: candidate.display_name.clone(),
                    skills: skills.into_iter().collect(),
                    matched_skills,
                    skill_score: score,
                    secondary_score: candidate.secondary_score,
                    combined_score: combined,
                }
            })
            .collect();

        let eligible_candidates = scored.len();

        tracing::debug!(
            "Scored {} of {} candidates for project {}",
            eligible_candidates,
            total_candidates,
            request.project_id
        );

        // Stage 4: rank and truncate
        let matches = rank(scored, request.limit as usize)?;

        tracing::info!(
            "Returning {} matches for project {} (from {} candidates)",
            matches.len(),
            request.project_id,
            total_candidates
        );

        Ok(MatchReport {
            project_id: request.project_id.clone(),
            matches,
            total_candidates,
            eligible_candidates,
            empty_required_skills,
        })
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
