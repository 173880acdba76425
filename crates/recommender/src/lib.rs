//! # Recommender Crate
//!
//! The two recommendation strategies and the engine that dispatches
//! between them.
//!
//! ## Components
//!
//! ### Content-Based Strategy
//! Popularity ranking regardless of individual taste:
//! - Mean rating per movie across all raters
//! - Movies the target user rated are excluded
//!
//! ### Collaborative Strategy
//! Similarity-weighted ratings from other users:
//! - User-user cosine similarity over zero-filled rating vectors
//! - Each movie scored as a weighted average of everyone's ratings
//!
//! ## Example Usage
//!
//! ```
//! use dataset::sample_dataset;
//! use recommender::{Engine, Method};
//! use std::sync::Arc;
//!
//! let dataset = Arc::new(sample_dataset().unwrap());
//! let engine = Engine::new(dataset);
//!
//! let recs = engine.recommend("585", Method::ContentBased, 2).unwrap();
//! assert_eq!(recs[0].title, "Inception");
//! ```

// Public modules
pub mod collaborative;
pub mod content_based;
pub mod engine;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use collaborative::Collaborative;
pub use content_based::ContentBased;
pub use engine::Engine;
pub use error::{RecommendError, Result};
pub use traits::Recommender;
pub use types::{Method, Recommendation};
