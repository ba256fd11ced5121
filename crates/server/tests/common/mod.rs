use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use data_loader::{Movie, MovieDataset};
use server::auth::ApiToken;
use server::{build_app_router, AppState, ServerConfig};

pub const TEST_TOKEN: &str = "test-token-1234";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        api_token: ApiToken::new(TEST_TOKEN),
        movies_data_file: None,
        cors_origins: Vec::new(),
        request_timeout_secs: 30,
    }
}

fn movie(title: &str, genre: &str, country: &str, avg_vote: f64) -> Movie {
    Movie {
        film_title: title.to_string(),
        year: 2000,
        genre: genre.to_string(),
        country: country.to_string(),
        avg_vote,
    }
}

/// The two-record dataset used by the endpoint examples.
pub fn small_dataset() -> MovieDataset {
    MovieDataset::new(vec![
        movie("Die Hard", "Action", "USA", 7.5),
        movie("Trainspotting", "Drama", "UK", 8.1),
    ])
}

/// Build the full application router over `dataset`.
///
/// Uses the same builder as `main.rs` so tests exercise the production
/// middleware stack (auth, security headers, tracing, CORS).
pub fn build_test_app(dataset: MovieDataset) -> Router {
    let config = test_config();
    let state = AppState::new(Arc::new(dataset), config.api_token.clone());
    build_app_router(state, &config)
}

/// Send an authenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    get_with_auth(app, uri, Some(&format!("Bearer {TEST_TOKEN}"))).await
}

/// Send a GET request with an optional raw `Authorization` header.
pub async fn get_with_auth(app: Router, uri: &str, authorization: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
