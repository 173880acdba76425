//! Result and selector types shared by the strategies.

use crate::error::RecommendError;
use dataset::MovieId;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A single ranked recommendation returned to the caller.
///
/// `score` is the mean rating for the content-based strategy and the
/// similarity-weighted average for the collaborative strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub score: f32,
}

/// Which strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    ContentBased,
    Collaborative,
}

impl FromStr for Method {
    type Err = RecommendError;

    /// Parse a method selector, trimming surrounding whitespace and
    /// ignoring case: "content-based" or "collaborative".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "content-based" => Ok(Method::ContentBased),
            "collaborative" => Ok(Method::Collaborative),
            _ => Err(RecommendError::InvalidMethod {
                input: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::ContentBased => write!(f, "content-based"),
            Method::Collaborative => write!(f, "collaborative"),
        }
    }
}
