/**
 * Routes Module
 * HTTP route handlers
 */
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::error::ErrorResponse;

pub mod contact;
pub mod health;
pub mod home;
pub mod projects;
pub mod skills;

/// Fallback for paths no route matches
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
            detail: None,
        }),
    )
}
