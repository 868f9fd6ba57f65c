//! Talent Match - skill-based matching engine for project marketplaces
//!
//! This library provides the core matching algorithm used to rank talent
//! profiles against a project's required skills. It implements a staged
//! pipeline: eligibility filtering, skill normalization, scoring, and
//! ranking. The engine is a pure function of its request - persistence,
//! transport, and authentication live in the surrounding service.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{MatchEngine, normalize::normalize_skills, scoring::{combined_score, skill_score}};
pub use crate::error::MatchError;
pub use crate::models::{BlendWeights, MatchFilters, MatchReport, MatchRequest, ScoredMatch, TalentCandidate};
