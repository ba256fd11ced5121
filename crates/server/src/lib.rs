//! Server crate for the movie query service.
//!
//! Wires the filter engine into an axum application: configuration, bearer
//! auth, error mapping, routes and the middleware stack.

pub mod auth;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod router;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use orchestrator::{MovieSearchService, SearchResults};
pub use router::build_app_router;
pub use state::AppState;
