//! Example: compute recommendations for a demo user
//!
//! Run with: cargo run --package recommender --example recommend_demo
//!
//! This example shows how to:
//! 1. Build the demo dataset
//! 2. Construct the engine (matrix + similarity table)
//! 3. Run both strategies for the same user
//! 4. Display the results

use dataset::sample_dataset;
use recommender::{Engine, Method};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("debug").init();

    println!("=== Dual-Strategy Recommendation Example ===\n");

    let dataset = Arc::new(sample_dataset()?);
    let (users, movies, ratings) = dataset.counts();
    println!("Dataset: {users} users, {movies} movies, {ratings} ratings");

    let engine = Engine::new(dataset);

    let user_id = "585";
    println!("\nMost similar users to {user_id}:");
    let neighbors = engine
        .similarity()
        .ranked_neighbors(user_id)
        .expect("demo user missing from similarity table");
    for (other, score) in neighbors {
        println!("  {other}: {score:.3}");
    }

    for method in [Method::ContentBased, Method::Collaborative] {
        println!("\nRecommendations for user {user_id} ({method}):");
        for (rank, rec) in engine.recommend(user_id, method, 2)?.iter().enumerate() {
            println!("  {}. {} - {:.2}", rank + 1, rec.title, rec.score);
        }
    }

    Ok(())
}
