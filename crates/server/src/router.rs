//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary and the
//! integration tests run the same middleware stack.

use std::time::Duration;

use axum::http::header::{
    self, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE,
};
use axum::http::{Method, StatusCode};
use axum::{middleware, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::auth::require_bearer_token;
use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Response header set unless the handler already provided one.
fn default_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(name, HeaderValue::from_static(value))
}

/// Build the full application [`Router`] with all middleware layers.
///
/// The middleware stack, innermost first:
///
/// 1. Bearer-token check (covers every route, including the 404 fallback)
/// 2. Request timeout
/// 3. Security headers
/// 4. Structured request/response tracing
/// 5. CORS (answers preflight requests before auth sees them)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    routes::api_routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer_token,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(default_header(header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .layer(default_header(header::X_FRAME_OPTIONS, "SAMEORIGIN"))
        .layer(default_header(header::X_DNS_PREFETCH_CONTROL, "off"))
        .layer(default_header(HeaderName::from_static("x-download-options"), "noopen"))
        .layer(default_header(header::X_XSS_PROTECTION, "0"))
        .layer(default_header(header::REFERRER_POLICY, "no-referrer"))
        .layer(default_header(
            header::STRICT_TRANSPORT_SECURITY,
            "max-age=15552000; includeSubDomains",
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// Build the CORS layer. No configured origins means any origin.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins = if config.cors_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(config.cors_origins.iter().cloned())
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
        .max_age(Duration::from_secs(3600))
}
