//! The user-movie rating matrix.
//!
//! Pivots flat rating records into a dense 2D table with users as rows and
//! movies as columns. A cell is `Option<f32>`: `None` means "not rated",
//! which is kept distinct from a stored rating so that later lookups can
//! tell absence apart from a numeric zero. Zero-filled copies of the rows
//! are produced only as similarity input.

use dataset::{MovieId, Rating, UserId};
use std::collections::HashMap;

/// Dense user x movie table built by pivoting rating records.
///
/// Row and column orders are sorted by id, so the layout is deterministic
/// for a given set of ratings.
#[derive(Debug, Clone)]
pub struct UserMovieMatrix {
    users: Vec<UserId>,
    movies: Vec<MovieId>,
    user_index: HashMap<UserId, usize>,
    movie_index: HashMap<MovieId, usize>,
    /// Row-major cells; `None` marks an absent rating
    cells: Vec<Option<f32>>,
}

impl UserMovieMatrix {
    /// Pivot rating records into the matrix.
    ///
    /// Rows are created for every user that appears in `ratings`, columns
    /// for every movie. If the same (user, movie) pair occurs twice the
    /// later record overwrites the earlier one; `Dataset::validate` rejects
    /// such input upstream.
    pub fn from_ratings(ratings: &[Rating]) -> Self {
        let mut users: Vec<UserId> = ratings.iter().map(|r| r.user_id.clone()).collect();
        users.sort_unstable();
        users.dedup();

        let mut movies: Vec<MovieId> = ratings.iter().map(|r| r.movie_id).collect();
        movies.sort_unstable();
        movies.dedup();

        let user_index: HashMap<UserId, usize> = users
            .iter()
            .enumerate()
            .map(|(i, u)| (u.clone(), i))
            .collect();
        let movie_index: HashMap<MovieId, usize> = movies
            .iter()
            .enumerate()
            .map(|(i, m)| (*m, i))
            .collect();

        let mut cells = vec![None; users.len() * movies.len()];
        for rating in ratings {
            let row = user_index[&rating.user_id];
            let col = movie_index[&rating.movie_id];
            cells[row * movies.len() + col] = Some(rating.rating);
        }

        Self {
            users,
            movies,
            user_index,
            movie_index,
            cells,
        }
    }

    /// Users in row order
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    /// Movies in column order
    pub fn movies(&self) -> &[MovieId] {
        &self.movies
    }

    /// Whether the user has a row in the matrix
    pub fn contains_user(&self, user_id: &str) -> bool {
        self.user_index.contains_key(user_id)
    }

    /// The rating a user gave a movie, or `None` if absent
    pub fn get(&self, user_id: &str, movie_id: MovieId) -> Option<f32> {
        let row = *self.user_index.get(user_id)?;
        let col = *self.movie_index.get(&movie_id)?;
        self.cells[row * self.movies.len() + col]
    }

    /// Movie ids the user has rated, in column order
    pub fn rated_movies(&self, user_id: &str) -> Vec<MovieId> {
        let Some(&row) = self.user_index.get(user_id) else {
            return Vec::new();
        };
        self.row(row)
            .iter()
            .zip(&self.movies)
            .filter_map(|(cell, &movie_id)| cell.map(|_| movie_id))
            .collect()
    }

    /// The user's row with absences replaced by zero, or `None` for an
    /// unknown user. This is the similarity-input view; absence and a
    /// literal zero are indistinguishable in it.
    pub fn zero_filled_row(&self, user_id: &str) -> Option<Vec<f32>> {
        let row = *self.user_index.get(user_id)?;
        Some(self.row(row).iter().map(|c| c.unwrap_or(0.0)).collect())
    }

    /// Zero-filled copies of every row, in user order
    pub fn zero_filled_rows(&self) -> Vec<Vec<f32>> {
        (0..self.users.len())
            .map(|row| self.row(row).iter().map(|c| c.unwrap_or(0.0)).collect())
            .collect()
    }

    fn row(&self, row: usize) -> &[Option<f32>] {
        let width = self.movies.len();
        &self.cells[row * width..(row + 1) * width]
    }
}
