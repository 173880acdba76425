//! Content-based strategy: rank by aggregate popularity.
//!
//! "Movies everyone else rates well, that you haven't seen yet."
//!
//! ## Algorithm
//! 1. Compute the mean rating of every movie across all users who rated it
//! 2. Remove movies the target user has already rated
//! 3. Sort descending by mean rating; ties keep ascending movie-id order
//! 4. Take the top `limit` and join against the movie table for titles
//!
//! An unknown user id is not an error here: with no ratings to exclude,
//! every movie is a candidate.

use crate::error::Result;
use crate::traits::Recommender;
use crate::types::Recommendation;
use dataset::{Dataset, MovieId};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Popularity-based recommender over the full rating table
pub struct ContentBased {
    /// Shared reference to the dataset (read-only)
    dataset: Arc<Dataset>,
}

impl ContentBased {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Mean rating per movie, accumulated in ascending movie-id order
    fn mean_ratings(&self) -> BTreeMap<MovieId, f32> {
        let mut sums: BTreeMap<MovieId, (f32, u32)> = BTreeMap::new();
        for rating in self.dataset.ratings() {
            let entry = sums.entry(rating.movie_id).or_insert((0.0, 0));
            entry.0 += rating.rating;
            entry.1 += 1;
        }

        sums.into_iter()
            .map(|(movie_id, (sum, count))| (movie_id, sum / count as f32))
            .collect()
    }
}

impl Recommender for ContentBased {
    fn name(&self) -> &str {
        "content-based"
    }

    #[instrument(skip(self))]
    fn recommend(&self, user_id: &str, limit: usize) -> Result<Vec<Recommendation>> {
        // Step 1: aggregate popularity over every rated movie
        let means = self.mean_ratings();

        // Step 2: exclude what the target user has already rated
        let seen: HashSet<MovieId> = self
            .dataset
            .user_ratings(user_id)
            .iter()
            .map(|r| r.movie_id)
            .collect();

        let mut candidates: Vec<(MovieId, f32)> = means
            .into_iter()
            .filter(|(movie_id, _)| !seen.contains(movie_id))
            .collect();

        // Step 3: stable sort keeps ascending-id order for equal means
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(limit);

        // Step 4: join against the movie table; ids with no catalog entry
        // are dropped
        let recommendations: Vec<Recommendation> = candidates
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

        debug!(count = recommendations.len(), "content-based recommendations ready");
        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::{sample_dataset, Movie, Rating};

    fn rating(user_id: &str, movie_id: MovieId, rating: f32) -> Rating {
        Rating {
            user_id: user_id.to_string(),
            movie_id,
            rating,
        }
    }

    #[test]
    fn test_sample_user_585() {
        let dataset = Arc::new(sample_dataset().unwrap());
        let strategy = ContentBased::new(dataset);

        let recs = strategy.recommend("585", 2).unwrap();

        // 585 rated only The World (10). Remaining means: Inception 5.0,
        // then Ironman and The Dark Knight tied at 4.0 with Ironman first
        // by ascending id.
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "Inception");
        assert_eq!(recs[0].score, 5.0);
        assert_eq!(recs[1].title, "Ironman");
        assert_eq!(recs[1].score, 4.0);
    }

    #[test]
    fn test_never_returns_rated_movie() {
        let dataset = Arc::new(sample_dataset().unwrap());
        let strategy = ContentBased::new(dataset.clone());

        for user in ["585", "5c2", "590", "5b3", "5b0"] {
            let rated: Vec<MovieId> =
                dataset.user_ratings(user).iter().map(|r| r.movie_id).collect();
            let recs = strategy.recommend(user, 10).unwrap();
            for rec in recs {
                assert!(!rated.contains(&rec.movie_id));
            }
        }
    }

    #[test]
    fn test_unknown_user_gets_all_movies_as_candidates() {
        let dataset = Arc::new(sample_dataset().unwrap());
        let strategy = ContentBased::new(dataset);

        let recs = strategy.recommend("nobody", 10).unwrap();
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0].title, "The World"); // 5.0, lower id than Inception
        assert_eq!(recs[1].title, "Inception"); // 5.0
    }

    #[test]
    fn test_mean_over_multiple_raters() {
        let mut dataset = Dataset::default();
        dataset.insert_movie(Movie {
            id: 1,
            title: "Heat".to_string(),
        });
        dataset.insert_rating(rating("a", 1, 5.0));
        dataset.insert_rating(rating("b", 1, 2.0));

        let strategy = ContentBased::new(Arc::new(dataset));
        let recs = strategy.recommend("c", 5).unwrap();

        assert_eq!(recs.len(), 1);
        assert!((recs[0].score - 3.5).abs() < 1e-6);
    }

    #[test]
    fn test_at_most_limit_results() {
        let dataset = Arc::new(sample_dataset().unwrap());
        let strategy = ContentBased::new(dataset);

        assert_eq!(strategy.recommend("585", 2).unwrap().len(), 2);
        assert_eq!(strategy.recommend("585", 100).unwrap().len(), 4);
    }

    #[test]
    fn test_unjoinable_candidate_is_dropped() {
        // Movie 99 is rated but missing from the catalog; it survives
        // ranking and is dropped at the join, shortening the result.
        let mut dataset = Dataset::default();
        dataset.insert_movie(Movie {
            id: 1,
            title: "Heat".to_string(),
        });
        dataset.insert_rating(rating("a", 1, 3.0));
        dataset.insert_rating(rating("a", 99, 5.0));

        let strategy = ContentBased::new(Arc::new(dataset));
        let recs = strategy.recommend("b", 2).unwrap();

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].movie_id, 1);
    }
}
