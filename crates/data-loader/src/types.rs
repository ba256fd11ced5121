//! Core domain types for the movie dataset.
//!
//! A [`Movie`] is one immutable record; a [`MovieDataset`] is the ordered,
//! read-only collection every request filters against.

use serde::{Deserialize, Serialize};

// =============================================================================
// Movie Record
// =============================================================================

/// Represents a movie in the dataset.
///
/// Field names match the bundled JSON document, so records round-trip
/// through serde without renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub film_title: String,
    pub year: u16,
    /// Free-form genre label (e.g. "Action", "Science Fiction")
    pub genre: String,
    /// Free-form production country (e.g. "Hong Kong")
    pub country: String,
    /// Average audience vote on a 0-10 scale
    pub avg_vote: f64,
}

// =============================================================================
// MovieDataset - The In-Memory Collection
// =============================================================================

/// Ordered, immutable sequence of movies.
///
/// Built once at startup and shared behind an `Arc`. Insertion order is
/// significant: every filter preserves it.
#[derive(Debug, Clone, Default)]
pub struct MovieDataset {
    pub(crate) movies: Vec<Movie>,
}

impl MovieDataset {
    /// Wrap an ordered list of movies.
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// All movies in insertion order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl From<Vec<Movie>> for MovieDataset {
    fn from(movies: Vec<Movie>) -> Self {
        Self::new(movies)
    }
}

impl<'a> IntoIterator for &'a MovieDataset {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}
