use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Configuration error
    ConfigError(String),
    /// Malformed caller input (non-positive base price, bad planet profile)
    InvalidInput(String),
    /// Unknown planet/product/agency key
    NotFound(String),
    /// Upstream AI API error
    UpstreamError { status: StatusCode, message: String },
    /// HTTP request error (preserves reqwest::Error for timeout/connect detection)
    HttpRequest(reqwest::Error),
    /// Order store error
    Database(sqlx::Error),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::UpstreamError { status, message } => {
                write!(f, "Upstream error ({}): {}", status, message)
            }
            Self::HttpRequest(err) => write!(f, "HTTP request error: {}", err),
            Self::Database(err) => write!(f, "Database error: {}", err),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::ConfigError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::UpstreamError { status, message } => (*status, message.clone()),
            Self::HttpRequest(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            Self::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Self::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::ConfigError(_) => "config_error",
        AppError::InvalidInput(_) => "invalid_input",
        AppError::NotFound(_) => "not_found",
        AppError::UpstreamError { .. } => "upstream_error",
        AppError::HttpRequest(_) => "http_request_error",
        AppError::Database(_) => "database_error",
        AppError::InternalError(_) => "internal_error",
    }
}

// Implement conversions from common error types
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpRequest(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::InternalError(format!("JSON error: {}", err))
    }
}
