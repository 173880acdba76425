//! Core trait for recommendation strategies.

use crate::error::Result;
use crate::types::Recommendation;

/// A recommendation strategy: given a user, produce a ranked list of
/// movies that user has not rated.
///
/// ## Design Note
/// - `Send + Sync` allows strategies to be shared across threads
/// - Implementations hold their own shared references to the dataset and
///   any derived matrices; `recommend` takes only the per-call inputs
pub trait Recommender: Send + Sync {
    /// Returns the name of this strategy (for logging and headers)
    fn name(&self) -> &str;

    /// Compute up to `limit` recommendations for `user_id`.
    ///
    /// # Returns
    /// * `Ok(Vec<Recommendation>)` - ranked best-first; may be shorter than
    ///   `limit` when fewer unseen candidates exist
    /// * `Err` - if the strategy requires the user to exist and it does not
    fn recommend(&self, user_id: &str, limit: usize) -> Result<Vec<Recommendation>>;
}
