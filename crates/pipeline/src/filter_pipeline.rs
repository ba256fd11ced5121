//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use data_loader::Movie;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(FieldMatchFilter::new(TextField::Genre, "action"))
///     .add_filter(MinimumVoteFilter::new(8));
///
/// let filtered = pipeline.apply(dataset.iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the movies.
    ///
    /// Each filter sees only the survivors of the one before it, so the
    /// result is the intersection of every filter's matches, in the
    /// original order.
    pub fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FieldMatchFilter, MinimumVoteFilter, TextField};

    fn create_test_movies() -> Vec<Movie> {
        vec![
            Movie {
                film_title: "Action in USA".to_string(),
                year: 1990,
                genre: "Action".to_string(),
                country: "USA".to_string(),
                avg_vote: 7.5,
            },
            Movie {
                film_title: "Drama in UK".to_string(),
                year: 1995,
                genre: "Drama".to_string(),
                country: "UK".to_string(),
                avg_vote: 8.1,
            },
            Movie {
                film_title: "Action in UK".to_string(),
                year: 2001,
                genre: "Action".to_string(),
                country: "UK".to_string(),
                avg_vote: 8.4,
            },
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let movies = create_test_movies();

        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(filtered.len(), 3);
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new()
            .add_filter(FieldMatchFilter::new(TextField::Country, "uk"));
        let movies = create_test_movies();

        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].film_title, "Drama in UK");
    }

    #[test]
    fn test_filters_narrow_sequentially() {
        let pipeline = FilterPipeline::new()
            .add_filter(FieldMatchFilter::new(TextField::Genre, "action"))
            .add_filter(FieldMatchFilter::new(TextField::Country, "uk"))
            .add_filter(MinimumVoteFilter::new(8));
        let movies = create_test_movies();

        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(pipeline.len(), 3);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].film_title, "Action in UK");
    }
}
