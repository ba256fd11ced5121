//! Movie search endpoints.
//!
//! - `GET /movie` keeps the original wire shape: a JSON array of matches,
//!   or the bare sentinel string when nothing matched.
//! - `GET /v2/movie` returns a tagged object with `matches` and `count`.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use data_loader::Movie;
use pipeline::{SearchQuery, NO_RESULTS_MESSAGE};

use crate::error::{AppError, AppResult};
use crate::orchestrator::SearchResults;
use crate::state::AppState;

/// Body of `GET /movie`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LegacySearchBody {
    Matches(Vec<Movie>),
    Message(&'static str),
}

impl From<SearchResults> for LegacySearchBody {
    fn from(results: SearchResults) -> Self {
        match results {
            SearchResults::Matches(movies) => LegacySearchBody::Matches(movies),
            SearchResults::NoResults => LegacySearchBody::Message(NO_RESULTS_MESSAGE),
        }
    }
}

/// Body of `GET /v2/movie`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub matches: Vec<Movie>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl From<SearchResults> for SearchResponse {
    fn from(results: SearchResults) -> Self {
        match results {
            SearchResults::Matches(matches) => SearchResponse {
                count: matches.len(),
                matches,
                message: None,
            },
            SearchResults::NoResults => SearchResponse {
                matches: Vec::new(),
                count: 0,
                message: Some(NO_RESULTS_MESSAGE),
            },
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movie", get(search_movies))
        .route("/v2/movie", get(search_movies_v2))
}

fn run_search(
    state: &AppState,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<SearchResults> {
    let Query(query) = query.map_err(|rejection| AppError::BadQuery(rejection.body_text()))?;
    Ok(state.search.search(&query)?)
}

async fn search_movies(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<LegacySearchBody>> {
    let results = run_search(&state, query)?;
    Ok(Json(results.into()))
}

async fn search_movies_v2(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<SearchResponse>> {
    let results = run_search(&state, query)?;
    Ok(Json(results.into()))
}
