use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the route resolver.
///
/// Resolution itself is total; these only come from parsing user input
/// (language codes, route names) and from loading a route table.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("Unknown route key: '{0}'")]
    UnknownRoute(String),

    #[error("Invalid path template '{template}': {source}")]
    InvalidPattern {
        template: String,
        #[source]
        source: regex::Error,
    },

    #[error("Route table failed validation: {}", .0.join("; "))]
    InvalidTable(Vec<String>),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error type for API endpoints, mapped to a JSON body and status code.
#[derive(Debug)]
pub enum ApiError {
    /// Unknown language code or route key in the request
    BadRequest(RouteError),
    /// Required query parameter absent
    MissingQueryParam(&'static str),
    /// Translated path cannot be sent as a `Location` header
    InvalidRedirect(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::MissingQueryParam(name) => (
                StatusCode::BAD_REQUEST,
                format!("Missing query parameter: {}", name),
            ),
            ApiError::InvalidRedirect(path) => (
                StatusCode::BAD_REQUEST,
                format!("Cannot redirect to {:?}: not a valid header value", path),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        ApiError::BadRequest(err)
    }
}
