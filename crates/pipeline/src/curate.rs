//! Query orchestration: validation, filter ordering and the empty-result sentinel.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{FieldMatchFilter, MinimumVoteFilter, TextField};
use crate::query::{parse_vote_threshold, SearchQuery};
use data_loader::{Movie, MovieDataset};
use thiserror::Error;

/// Message returned in place of an empty match list.
pub const NO_RESULTS_MESSAGE: &str = "Sorry! No results found, please try again.";

/// Reasons a query is rejected before any result is produced.
///
/// The display text is the exact message shown to API callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurateError {
    #[error("Please provide at least one query!")]
    NoQuery,

    #[error("Average vote must be a number!")]
    InvalidVote,
}

/// Outcome of a successful query.
#[derive(Debug, Clone, PartialEq)]
pub enum CurateOutcome<'a> {
    /// At least one movie matched, in dataset order.
    Matches(Vec<&'a Movie>),
    /// Nothing matched. Not an error.
    NoResults,
}

impl<'a> CurateOutcome<'a> {
    fn from_matches(matches: Vec<&'a Movie>) -> Self {
        if matches.is_empty() {
            CurateOutcome::NoResults
        } else {
            CurateOutcome::Matches(matches)
        }
    }

    pub fn matches(&self) -> &[&'a Movie] {
        match self {
            CurateOutcome::Matches(matches) => matches,
            CurateOutcome::NoResults => &[],
        }
    }

    pub fn count(&self) -> usize {
        self.matches().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CurateOutcome::NoResults)
    }
}

/// Build the filter pipeline for a query.
///
/// Filters are added in fixed order: genre, country, then average vote.
/// Fails if the query has no constraint or the vote does not parse, in
/// which case nothing is filtered.
pub fn build_pipeline(query: &SearchQuery) -> Result<FilterPipeline, CurateError> {
    if query.is_empty() {
        return Err(CurateError::NoQuery);
    }

    let threshold = query.avg_vote().map(parse_vote_threshold).transpose()?;

    let mut pipeline = FilterPipeline::new();
    if let Some(genre) = query.genre() {
        pipeline = pipeline.add_filter(FieldMatchFilter::new(TextField::Genre, genre));
    }
    if let Some(country) = query.country() {
        pipeline = pipeline.add_filter(FieldMatchFilter::new(TextField::Country, country));
    }
    if let Some(threshold) = threshold {
        pipeline = pipeline.add_filter(MinimumVoteFilter::new(threshold));
    }
    Ok(pipeline)
}

/// Run a query against the dataset.
pub fn curate<'a>(dataset: &'a MovieDataset, query: &SearchQuery) -> Result<CurateOutcome<'a>, CurateError> {
    let pipeline = build_pipeline(query)?;
    let matches = pipeline.apply(dataset.iter().collect());
    Ok(CurateOutcome::from_matches(matches))
}
