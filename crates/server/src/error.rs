use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use pipeline::CurateError;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{ "error": <message> }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or wrong bearer token.
    #[error("Unauthorized Request")]
    Unauthorized,

    /// The query was rejected by validation.
    #[error(transparent)]
    Curate(#[from] CurateError),

    /// The query string could not be decoded.
    #[error("Invalid query string: {0}")]
    BadQuery(String),

    /// No route matched.
    #[error("Not Found")]
    NotFound,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Curate(_) | AppError::BadQuery(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.to_string() });
        (self.status(), axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::from(CurateError::NoQuery).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::BadQuery("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_messages_match_wire_contract() {
        assert_eq!(AppError::Unauthorized.to_string(), "Unauthorized Request");
        assert_eq!(
            AppError::from(CurateError::NoQuery).to_string(),
            "Please provide at least one query!"
        );
        assert_eq!(
            AppError::from(CurateError::InvalidVote).to_string(),
            "Average vote must be a number!"
        );
    }
}
