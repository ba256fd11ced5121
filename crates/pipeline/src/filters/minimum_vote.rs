//! Filter to enforce a minimum average vote.

use crate::traits::Filter;
use data_loader::Movie;

/// Removes movies voted below an integer threshold.
///
/// The bound is inclusive: a movie with `avg_vote == threshold` survives.
pub struct MinimumVoteFilter {
    threshold: i64,
}

impl MinimumVoteFilter {
    pub fn new(threshold: i64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }
}

impl Filter for MinimumVoteFilter {
    fn name(&self) -> &str {
        "MinimumVoteFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        let threshold = self.threshold as f64;
        movies
            .into_iter()
            .filter(|movie| movie.avg_vote >= threshold)
            .collect()
    }
}

/// Filter `movies` down to those with `avg_vote >= threshold`.
pub fn filter_by_vote(movies: Vec<&Movie>, threshold: i64) -> Vec<&Movie> {
    MinimumVoteFilter::new(threshold).apply(movies)
}
