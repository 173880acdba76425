//! Cosine similarity between user rating vectors.
//!
//! ## Algorithm
//! 1. Take the zero-filled row vector of every user in the matrix
//! 2. Compute sim(u, v) = dot(u, v) / (||u|| * ||v||) for every pair
//! 3. Store the results as a dense symmetric table in user order
//!
//! A zero-magnitude vector has similarity 0.0 to every user, including
//! itself, so no NaN ever enters the table.

use crate::matrix::UserMovieMatrix;
use dataset::UserId;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Normalized dot product of two equal-length vectors.
///
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Dense symmetric user-user similarity table.
///
/// Scores are in [-1, 1]; the diagonal is 1.0 for any user whose rating
/// vector is non-zero.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    users: Vec<UserId>,
    user_index: HashMap<UserId, usize>,
    /// Row-major scores, `users.len()` squared
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute pairwise similarities over every user row of the matrix.
    ///
    /// The pairwise sweep runs data-parallel over rows; the output layout
    /// is deterministic regardless of scheduling.
    pub fn from_matrix(matrix: &UserMovieMatrix) -> Self {
        let users = matrix.users().to_vec();
        let rows = matrix.zero_filled_rows();

        let scores: Vec<f32> = rows
            .par_iter()
            .flat_map_iter(|row_u| rows.iter().map(move |row_v| cosine_similarity(row_u, row_v)))
            .collect();

        debug!(users = users.len(), "built similarity matrix");

        let user_index = users
            .iter()
            .enumerate()
            .map(|(i, u)| (u.clone(), i))
            .collect();

        Self {
            users,
            user_index,
            scores,
        }
    }

    /// Users in row order (same order as the source matrix)
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    /// Whether the user has a row in the table
    pub fn contains_user(&self, user_id: &str) -> bool {
        self.user_index.contains_key(user_id)
    }

    /// Similarity between two users, or `None` if either is unknown
    pub fn get(&self, a: &str, b: &str) -> Option<f32> {
        let row = *self.user_index.get(a)?;
        let col = *self.user_index.get(b)?;
        Some(self.scores[row * self.users.len() + col])
    }

    /// The user's similarity row in user order, or `None` for an unknown user
    pub fn row(&self, user_id: &str) -> Option<&[f32]> {
        let row = *self.user_index.get(user_id)?;
        let width = self.users.len();
        Some(&self.scores[row * width..(row + 1) * width])
    }

    /// All users paired with their similarity to `user_id`, most similar
    /// first. Ties keep ascending user-id order.
    pub fn ranked_neighbors(&self, user_id: &str) -> Option<Vec<(&UserId, f32)>> {
        let row = self.row(user_id)?;
        let mut neighbors: Vec<(&UserId, f32)> = self.users.iter().zip(row.iter().copied()).collect();
        neighbors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        Some(neighbors)
    }
}
