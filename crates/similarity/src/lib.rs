//! # Similarity Crate
//!
//! Builds the user-movie rating matrix and the user-user cosine similarity
//! table that the collaborative strategy consumes.
//!
//! ## Components
//!
//! - **matrix**: `UserMovieMatrix`, the absence-preserving pivot of rating
//!   records
//! - **cosine**: `SimilarityMatrix` and the cosine measure itself
//!
//! ## Example Usage
//!
//! ```
//! use dataset::sample_dataset;
//! use similarity::build_similarity;
//!
//! let dataset = sample_dataset().unwrap();
//! let (matrix, similarity) = build_similarity(dataset.ratings());
//!
//! assert_eq!(matrix.get("585", 10), Some(5.0));
//! assert_eq!(similarity.get("585", "585"), Some(1.0));
//! ```

// Public modules
pub mod cosine;
pub mod matrix;

// Re-export commonly used types
pub use cosine::{cosine_similarity, SimilarityMatrix};
pub use matrix::UserMovieMatrix;

use dataset::Rating;

/// Pivot rating records and compute the pairwise similarity table.
///
/// Returns the absence-preserving matrix (for "has this user rated this
/// movie" lookups) and the dense symmetric similarity table derived from
/// its zero-filled rows. Both are keyed by user id in the same sorted order.
pub fn build_similarity(ratings: &[Rating]) -> (UserMovieMatrix, SimilarityMatrix) {
    let matrix = UserMovieMatrix::from_ratings(ratings);
    let similarity = SimilarityMatrix::from_matrix(&matrix);
    (matrix, similarity)
}
