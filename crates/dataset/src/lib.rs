//! # Dataset Crate
//!
//! In-memory tables of rating and movie records, plus the built-in demo data.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Rating, Movie, Dataset)
//! - **sample**: The fixed demo ratings table
//! - **error**: Error types for dataset validation
//!
//! ## Example Usage
//!
//! ```
//! use dataset::sample_dataset;
//!
//! let dataset = sample_dataset().unwrap();
//! let movie = dataset.get_movie(10).unwrap();
//! let ratings = dataset.user_ratings("585");
//!
//! assert_eq!(movie.title, "The World");
//! assert_eq!(ratings.len(), 1);
//! ```

// Public modules
pub mod error;
pub mod sample;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DatasetError, Result};
pub use sample::sample_dataset;
pub use types::{Dataset, Movie, MovieId, Rating, UserId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new();
        let (users, movies, ratings) = dataset.counts();

        assert_eq!(users, 0);
        assert_eq!(movies, 0);
        assert_eq!(ratings, 0);
        assert!(dataset.get_movie(999).is_none());
        assert!(dataset.user_ratings("nobody").is_empty());
        assert!(dataset.movie_ratings(999).is_empty());
    }

    #[test]
    fn test_insert_movie() {
        let mut dataset = Dataset::new();

        dataset.insert_movie(Movie {
            id: 1,
            title: "Heat".to_string(),
        });

        let retrieved = dataset.get_movie(1).unwrap();
        assert_eq!(retrieved.id, 1);
        assert_eq!(retrieved.title, "Heat");
    }

    #[test]
    fn test_insert_rating_updates_indices() {
        let mut dataset = Dataset::new();

        dataset.insert_rating(Rating {
            user_id: "a1".to_string(),
            movie_id: 7,
            rating: 3.5,
        });

        assert_eq!(dataset.user_ratings("a1").len(), 1);
        assert_eq!(dataset.movie_ratings(7).len(), 1);
        assert_eq!(dataset.ratings().len(), 1);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut dataset = Dataset::new();
        dataset.insert_rating(Rating {
            user_id: "a1".to_string(),
            movie_id: 7,
            rating: 6.0,
        });

        assert!(matches!(
            dataset.validate(),
            Err(DatasetError::InvalidRating { movie_id: 7, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut dataset = Dataset::new();
        for _ in 0..2 {
            dataset.insert_rating(Rating {
                user_id: "a1".to_string(),
                movie_id: 7,
                rating: 4.0,
            });
        }

        assert!(matches!(
            dataset.validate(),
            Err(DatasetError::DuplicateRating { movie_id: 7, .. })
        ));
    }

    #[test]
    fn test_validate_tolerates_unjoinable_movie_id() {
        // A rating may point at a movie that is missing from the catalog;
        // the join step drops it later.
        let mut dataset = Dataset::new();
        dataset.insert_rating(Rating {
            user_id: "a1".to_string(),
            movie_id: 999,
            rating: 4.0,
        });

        assert!(dataset.validate().is_ok());
    }
}
