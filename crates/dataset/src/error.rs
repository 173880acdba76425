//! Error types for the dataset crate.

use crate::types::{MovieId, UserId};
use thiserror::Error;

/// Errors that can occur while validating the in-memory tables
#[derive(Error, Debug)]
pub enum DatasetError {
    /// A rating value fell outside the 1.0 - 5.0 scale
    #[error("Invalid rating {value} from user {user_id} for movie {movie_id}")]
    InvalidRating {
        user_id: UserId,
        movie_id: MovieId,
        value: f32,
    },

    /// More than one rating for the same (user, movie) pair
    #[error("Duplicate rating from user {user_id} for movie {movie_id}")]
    DuplicateRating { user_id: UserId, movie_id: MovieId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DatasetError>;
