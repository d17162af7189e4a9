use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::error::ErrorKind;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(anyhow::Error),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        // A document that fails to decode is a schema problem, not an outage.
        match err.kind.as_ref() {
            ErrorKind::BsonDeserialization(_) => {
                AppError::ValidationError(anyhow::Error::new(err))
            }
            _ => AppError::StoreUnavailable(anyhow::Error::new(err)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            message: &'static str,
        }

        // Full detail stays server-side; the wire contract is one fixed body
        // for every handler-level failure.
        match &self {
            AppError::ValidationError(err) => {
                tracing::error!(error = %err, "document failed schema validation")
            }
            AppError::StoreUnavailable(err) => {
                tracing::error!(error = %err, "store query failed")
            }
            AppError::ConfigError(err) => {
                tracing::error!(error = %err, "configuration error")
            }
            AppError::InternalError(err) => {
                tracing::error!(error = %err, "internal error")
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: "Internal server error",
            }),
        )
            .into_response()
    }
}
