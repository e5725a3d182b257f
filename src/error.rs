use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::logging::LogInitError;

/// Error body shared by every failing API response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Project not found")]
    NotFound,

    #[error("Validation failed: {detail}")]
    Validation { status: StatusCode, detail: String },

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound => AppError::NotFound,
            CatalogError::DuplicateProjectId(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Project not found".to_string(),
                    detail: None,
                },
            ),
            AppError::Validation { status, detail } => (
                status,
                ErrorResponse {
                    error: "Validation failed".to_string(),
                    detail: Some(detail),
                },
            ),
            AppError::Render(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        detail: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Failures that stop the server before or while it is serving
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("logging setup failed: {0}")]
    Logging(#[from] LogInitError),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = AppError::from(CatalogError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "error": "Project not found" }));
    }

    #[tokio::test]
    async fn test_render_error_does_not_leak_cause() {
        let err = AppError::Render(askama::Error::Custom("secret path /etc".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_validation_keeps_status_and_detail() {
        let err = AppError::Validation {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: "missing field `email`".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Validation failed");
        assert_eq!(json["detail"], "missing field `email`");
    }
}
