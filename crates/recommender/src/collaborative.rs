//! Collaborative strategy: similarity-weighted ratings from other users.
//!
//! "Users similar to you rated these movies well."
//!
//! ## Algorithm
//! 1. Look up the target user's similarity row (self included); an unknown
//!    user is a `UserNotFound` error
//! 2. Score every movie as the similarity-weighted average of all users'
//!    zero-filled ratings:
//!    sum(sim(target, u) * rating(u, movie)) / sum(sim(target, u))
//! 3. Remove movies the target user has rated, using the
//!    absence-preserving matrix
//! 4. Sort descending by score; ties keep ascending movie-id order
//! 5. Take the top `limit` and join against the movie table for titles
//!
//! Users who never rated a movie contribute a zero into the weighted sum
//! for it, which pulls scores toward broadly-rated movies. That bias is
//! part of the scoring contract here, not something to correct in place;
//! DESIGN.md records the decision.

use crate::error::{RecommendError, Result};
use crate::traits::Recommender;
use crate::types::Recommendation;
use dataset::{Dataset, MovieId};
use similarity::{SimilarityMatrix, UserMovieMatrix};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Similarity-weighted recommender over the user-user cosine table
pub struct Collaborative {
    /// Shared reference to the dataset (read-only)
    dataset: Arc<Dataset>,
    /// Absence-preserving pivot of the rating table
    matrix: Arc<UserMovieMatrix>,
    /// Dense user-user cosine similarity table
    similarity: Arc<SimilarityMatrix>,
}

impl Collaborative {
    pub fn new(
        dataset: Arc<Dataset>,
        matrix: Arc<UserMovieMatrix>,
        similarity: Arc<SimilarityMatrix>,
    ) -> Self {
        Self {
            dataset,
            matrix,
            similarity,
        }
    }
}

impl Recommender for Collaborative {
    fn name(&self) -> &str {
        "collaborative"
    }

    #[instrument(skip(self))]
    fn recommend(&self, user_id: &str, limit: usize) -> Result<Vec<Recommendation>> {
        // Step 1: the similarity row is the per-user weight vector
        let weights = self
            .similarity
            .row(user_id)
            .ok_or_else(|| RecommendError::UserNotFound {
                user_id: user_id.to_string(),
            })?;

        let weight_sum: f32 = weights.iter().sum();
        if weight_sum == 0.0 {
            // Only reachable when the target's rating vector has zero
            // magnitude; there is no defined weighted average then.
            warn!(user_id, "similarity weights sum to zero; no recommendations");
            return Ok(Vec::new());
        }

        let users = self.similarity.users();

        // Step 2: weighted average per movie column, unrated cells
        // contributing zero
        let mut scores: Vec<(MovieId, f32)> = self
            .matrix
            .movies()
            .iter()
            .map(|&movie_id| {
                let weighted: f32 = users
                    .iter()
                    .zip(weights)
                    .map(|(u, &sim)| sim * self.matrix.get(u, movie_id).unwrap_or(0.0))
                    .sum();
                (movie_id, weighted / weight_sum)
            })
            .collect();

        // Step 3: exclude rated movies via the absence-preserving row
        scores.retain(|&(movie_id, _)| self.matrix.get(user_id, movie_id).is_none());

        // Step 4: stable sort keeps ascending-id order for equal scores
        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scores.truncate(limit);

        // Step 5: join against the movie table; ids with no catalog entry
        // are dropped
        let recommendations: Vec<Recommendation> = scores
            .into_iter()
            .filter_map(|(movie_id, score)| match self.dataset.get_movie(movie_id) {
                Some(movie) => Some(Recommendation {
                    movie_id,
                    title: movie.title.clone(),
                    score,
                }),
                None => {
                    debug!(movie_id, "dropping candidate with no catalog entry");
                    None
                }
            })
            .collect();

        debug!(count = recommendations.len(), "collaborative recommendations ready");
        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::{sample_dataset, Movie, Rating};
    use similarity::build_similarity;

    fn rating(user_id: &str, movie_id: MovieId, rating: f32) -> Rating {
        Rating {
            user_id: user_id.to_string(),
            movie_id,
            rating,
        }
    }

    fn strategy_for(dataset: Dataset) -> Collaborative {
        let (matrix, similarity) = build_similarity(dataset.ratings());
        Collaborative::new(
            Arc::new(dataset),
            Arc::new(matrix),
            Arc::new(similarity),
        )
    }

    /// Three users with overlapping ratings over movies 1-3:
    /// a: 1 -> 5, 2 -> 3;  b: 1 -> 4, 3 -> 5;  c: 2 -> 4, 3 -> 2
    fn overlap_dataset() -> Dataset {
        let mut dataset = Dataset::default();
        for (id, title) in [(1, "Heat"), (2, "Ronin"), (3, "Spartan")] {
            dataset.insert_movie(Movie {
                id,
                title: title.to_string(),
            });
        }
        for r in [
            rating("a", 1, 5.0),
            rating("a", 2, 3.0),
            rating("b", 1, 4.0),
            rating("b", 3, 5.0),
            rating("c", 2, 4.0),
            rating("c", 3, 2.0),
        ] {
            dataset.insert_rating(r);
        }
        dataset
    }

    #[test]
    fn test_unknown_user_is_an_error() {
        let strategy = strategy_for(sample_dataset().unwrap());

        let err = strategy.recommend("nobody", 2).unwrap_err();
        assert_eq!(
            err,
            RecommendError::UserNotFound {
                user_id: "nobody".to_string()
            }
        );
    }

    #[test]
    fn test_sample_user_585() {
        let strategy = strategy_for(sample_dataset().unwrap());

        // Every sample user rated a single distinct movie, so all
        // off-diagonal similarities are zero and the weight vector reduces
        // to self-similarity alone. Unseen movies all score 0.0 and the
        // stable order yields the two lowest unseen ids.
        let recs = strategy.recommend("585", 2).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "Ironman");
        assert_eq!(recs[0].score, 0.0);
        assert_eq!(recs[1].title, "Deadpool");
        assert_eq!(recs[1].score, 0.0);
    }

    #[test]
    fn test_weighted_average_math() {
        // For target a: sim(a,a) = 1,
        // sim(a,b) = 20 / (sqrt(34) * sqrt(41)) = 0.53567,
        // sim(a,c) = 12 / (sqrt(34) * sqrt(20)) = 0.46018,
        // weight sum = 1.99585.
        // Movie 3 (the only one a hasn't rated):
        // (0.53567 * 5 + 0.46018 * 2) / 1.99585 = 1.80310
        let strategy = strategy_for(overlap_dataset());

        let recs = strategy.recommend("a", 2).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].movie_id, 3);
        assert_eq!(recs[0].title, "Spartan");
        assert!((recs[0].score - 1.80310).abs() < 1e-3);
    }

    #[test]
    fn test_never_returns_rated_movie() {
        let dataset = overlap_dataset();
        let rated_by_b: Vec<MovieId> =
            dataset.user_ratings("b").iter().map(|r| r.movie_id).collect();
        let strategy = strategy_for(dataset);

        let recs = strategy.recommend("b", 10).unwrap();
        for rec in &recs {
            assert!(!rated_by_b.contains(&rec.movie_id));
        }
        assert_eq!(recs.len(), 1); // only movie 2 is unseen by b
    }

    #[test]
    fn test_zero_weight_vector_yields_empty_result() {
        // A rating value of 0.0 is outside the validated scale but can be
        // constructed directly; it produces a zero-magnitude row whose
        // similarity to everyone (itself included) is zero.
        let mut dataset = Dataset::default();
        dataset.insert_movie(Movie {
            id: 1,
            title: "Heat".to_string(),
        });
        dataset.insert_rating(rating("z", 1, 0.0));
        dataset.insert_rating(rating("a", 1, 5.0));

        let strategy = strategy_for(dataset);
        let recs = strategy.recommend("z", 2).unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn test_at_most_limit_results() {
        let strategy = strategy_for(sample_dataset().unwrap());

        assert_eq!(strategy.recommend("585", 1).unwrap().len(), 1);
        assert_eq!(strategy.recommend("585", 100).unwrap().len(), 4);
    }
}
