//! Core domain types for the ratings table.
//!
//! This module defines the fundamental data structures used throughout the
//! system: rating and movie records, and the `Dataset` index that owns them.

use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user ids with movie ids

/// Unique identifier for a user. User ids in the demo data are short opaque
/// strings ("585", "5c2"), so the id type is a string, not a number.
pub type UserId = String;

/// Unique identifier for a movie
pub type MovieId = u32;

// =============================================================================
// Record Types
// =============================================================================

/// A single rating given by a user to a movie.
///
/// At most one rating per (user, movie) pair is expected; `Dataset::validate`
/// flags duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Rating value on a 1.0 to 5.0 scale
    pub rating: f32,
}

/// A movie in the catalog. `id` is the join key to ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
}

// =============================================================================
// Dataset - The In-Memory Tables
// =============================================================================

/// Owns the rating and movie tables for the session's lifetime.
///
/// Construction is the only mutation; once built the dataset is passed
/// around by shared reference and every derived structure (rating matrix,
/// similarity table) is recomputed from it on demand.
///
/// Per-user and per-movie indices are maintained alongside the flat rating
/// list so that lookups are O(1).
#[derive(Debug, Default)]
pub struct Dataset {
    movies: HashMap<MovieId, Movie>,
    ratings: Vec<Rating>,

    // Rating indices for fast lookups
    user_ratings: HashMap<UserId, Vec<Rating>>,
    movie_ratings: HashMap<MovieId, Vec<Rating>>,
}

impl Dataset {
    /// Creates a new, empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a movie into the catalog
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    /// Insert a rating and update the per-user / per-movie indices
    pub fn insert_rating(&mut self, rating: Rating) {
        self.user_ratings
            .entry(rating.user_id.clone())
            .or_default()
            .push(rating.clone());

        self.movie_ratings
            .entry(rating.movie_id)
            .or_default()
            .push(rating.clone());

        self.ratings.push(rating);
    }

    /// Get a movie by id
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// All ratings in insertion order
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// All ratings made by a user; empty slice if the user is unknown
    pub fn user_ratings(&self, user_id: &str) -> &[Rating] {
        self.user_ratings
            .get(user_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All ratings received by a movie; empty slice if none
    pub fn movie_ratings(&self, movie_id: MovieId) -> &[Rating] {
        self.movie_ratings
            .get(&movie_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Catalog movie ids in ascending order
    pub fn movie_ids(&self) -> Vec<MovieId> {
        let mut ids: Vec<MovieId> = self.movies.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Ids of every user that has rated at least one movie, in ascending order
    pub fn user_ids(&self) -> Vec<&UserId> {
        let mut ids: Vec<&UserId> = self.user_ratings.keys().collect();
        ids.sort_unstable();
        ids
    }

    /// Get counts for debugging/validation: (users, movies, ratings)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.user_ratings.len(), self.movies.len(), self.ratings.len())
    }

    /// Validate the rating table.
    ///
    /// Checks that every rating value is on the 1.0 - 5.0 scale and that no
    /// (user, movie) pair appears twice. A rating may reference a movie id
    /// that is missing from the catalog; such rows are tolerated here and
    /// dropped when recommendations are joined against the movie table.
    pub fn validate(&self) -> crate::error::Result<()> {
        let mut seen: HashSet<(&str, MovieId)> = HashSet::new();

        for rating in &self.ratings {
            if !(1.0..=5.0).contains(&rating.rating) {
                return Err(DatasetError::InvalidRating {
                    user_id: rating.user_id.clone(),
                    movie_id: rating.movie_id,
                    value: rating.rating,
                });
            }
            if !seen.insert((rating.user_id.as_str(), rating.movie_id)) {
                return Err(DatasetError::DuplicateRating {
                    user_id: rating.user_id.clone(),
                    movie_id: rating.movie_id,
                });
            }
        }
        Ok(())
    }
}
