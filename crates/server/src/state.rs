use std::sync::Arc;

use data_loader::MovieDataset;

use crate::auth::ApiToken;
use crate::orchestrator::MovieSearchService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the dataset and token sit behind `Arc`s.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query runner over the read-only dataset.
    pub search: MovieSearchService,
    /// Secret every request must present.
    pub api_token: ApiToken,
}

impl AppState {
    pub fn new(dataset: Arc<MovieDataset>, api_token: ApiToken) -> Self {
        Self {
            search: MovieSearchService::new(dataset),
            api_token,
        }
    }
}
