//! Error types for the recommender crate.

use thiserror::Error;

/// Errors that can occur while computing recommendations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// The target user has no row in the similarity index
    #[error("User '{user_id}' not found in the ratings data")]
    UserNotFound { user_id: String },

    /// The method selector did not name a known strategy
    #[error("Invalid method selected: '{input}'")]
    InvalidMethod { input: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
