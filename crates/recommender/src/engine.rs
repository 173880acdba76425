//! # Recommendation Engine
//!
//! Owns the dataset and the derived matrices and dispatches a method
//! selection to the right strategy:
//! 1. Pivot the rating table and build the similarity matrix (once, at
//!    construction)
//! 2. Wire both strategies to the shared data
//! 3. Route each `recommend` call by `Method`

use crate::collaborative::Collaborative;
use crate::content_based::ContentBased;
use crate::error::Result;
use crate::traits::Recommender;
use crate::types::{Method, Recommendation};
use dataset::Dataset;
use similarity::{build_similarity, SimilarityMatrix, UserMovieMatrix};
use std::sync::Arc;
use tracing::info;

/// Coordinates the two strategies over one immutable dataset
pub struct Engine {
    dataset: Arc<Dataset>,
    matrix: Arc<UserMovieMatrix>,
    similarity: Arc<SimilarityMatrix>,
    content_based: ContentBased,
    collaborative: Collaborative,
}

impl Engine {
    /// Build the derived matrices and wire up both strategies
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let (matrix, similarity) = build_similarity(dataset.ratings());
        let matrix = Arc::new(matrix);
        let similarity = Arc::new(similarity);

        info!(
            users = matrix.users().len(),
            movies = matrix.movies().len(),
            "recommendation engine ready"
        );

        let content_based = ContentBased::new(dataset.clone());
        let collaborative = Collaborative::new(
            dataset.clone(),
            matrix.clone(),
            similarity.clone(),
        );

        Self {
            dataset,
            matrix,
            similarity,
            content_based,
            collaborative,
        }
    }

    /// Compute up to `limit` recommendations for `user_id` with the chosen
    /// strategy
    pub fn recommend(
        &self,
        user_id: &str,
        method: Method,
        limit: usize,
    ) -> Result<Vec<Recommendation>> {
        let strategy: &dyn Recommender = match method {
            Method::ContentBased => &self.content_based,
            Method::Collaborative => &self.collaborative,
        };
        strategy.recommend(user_id, limit)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn matrix(&self) -> &UserMovieMatrix {
        &self.matrix
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }
}
