//! Core traits for the filtering pipeline.

use data_loader::Movie;

/// Core trait for narrowing a set of movies.
///
/// Filters borrow records from the shared dataset and must keep the
/// relative order of the survivors.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter, returning the records that pass.
    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie>;
}
