//! # Search Orchestrator
//!
//! Coordinates one search request:
//! 1. Validate the query and build the filter pipeline
//! 2. Run the pipeline over the shared dataset
//! 3. Copy the survivors out of the dataset
//! 4. Log a summary with timing

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use data_loader::{Movie, MovieDataset};
use pipeline::{curate, CurateError, CurateOutcome, SearchQuery};

/// Owned result of a search, detached from the dataset borrow.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    /// Non-empty matches in dataset order.
    Matches(Vec<Movie>),
    /// Nothing matched.
    NoResults,
}

impl SearchResults {
    pub fn count(&self) -> usize {
        match self {
            SearchResults::Matches(movies) => movies.len(),
            SearchResults::NoResults => 0,
        }
    }
}

impl From<CurateOutcome<'_>> for SearchResults {
    fn from(outcome: CurateOutcome<'_>) -> Self {
        match outcome {
            CurateOutcome::Matches(movies) => {
                SearchResults::Matches(movies.into_iter().cloned().collect())
            }
            CurateOutcome::NoResults => SearchResults::NoResults,
        }
    }
}

/// Runs queries against the read-only dataset.
///
/// Cheap to clone; every clone shares the same dataset.
#[derive(Debug, Clone)]
pub struct MovieSearchService {
    dataset: Arc<MovieDataset>,
}

impl MovieSearchService {
    pub fn new(dataset: Arc<MovieDataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &MovieDataset {
        &self.dataset
    }

    /// Main entry point: run one query.
    ///
    /// # Returns
    /// * `Ok(SearchResults)` - matches or the empty outcome
    /// * `Err(CurateError)` - the query was rejected before filtering
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResults, CurateError> {
        let start_time = Instant::now();

        let outcome = curate(&self.dataset, query)?;
        let results = SearchResults::from(outcome);

        info!(
            genre = query.genre(),
            country = query.country(),
            avg_vote = query.avg_vote(),
            "Search matched {} of {} movies in {:.2?}",
            results.count(),
            self.dataset.len(),
            start_time.elapsed()
        );
        Ok(results)
    }
}
