use thiserror::Error;

/// Errors produced by the matching engine
///
/// The engine is a pure computation, so every error is a form of invalid
/// input. The surrounding HTTP layer maps these to 4xx responses.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
