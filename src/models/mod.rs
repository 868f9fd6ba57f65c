// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BlendWeights, MatchFilters, ScoredMatch, TalentCandidate};
pub use requests::MatchRequest;
pub use responses::MatchReport;
