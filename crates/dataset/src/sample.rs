//! Built-in demo data.
//!
//! The program works on a small fixed ratings table rather than loading
//! files; this module assembles that table as an explicit value so the rest
//! of the system never touches ambient globals.

use crate::error::Result;
use crate::types::{Dataset, Movie, Rating};

/// Build the demo dataset: five users, five movies, one rating each.
///
/// The returned value is validated (rating range, duplicate pairs) before it
/// is handed to callers.
pub fn sample_dataset() -> Result<Dataset> {
    let mut dataset = Dataset::new();

    for (id, title) in [
        (10, "The World"),
        (20, "Ironman"),
        (30, "Deadpool"),
        (40, "The Dark Knight"),
        (50, "Inception"),
    ] {
        dataset.insert_movie(Movie {
            id,
            title: title.to_string(),
        });
    }

    for (user_id, movie_id, rating) in [
        ("585", 10, 5.0),
        ("5c2", 20, 4.0),
        ("590", 30, 2.0),
        ("5b3", 40, 4.0),
        ("5b0", 50, 5.0),
    ] {
        dataset.insert_rating(Rating {
            user_id: user_id.to_string(),
            movie_id,
            rating,
        });
    }

    dataset.validate()?;
    Ok(dataset)
}
