/**
 * Contact Route
 * Accepts contact form submissions; they are logged, not stored
 */
use axum::{
    body::Bytes,
    extract::Extension,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use tower_http::request_id::RequestId;

use crate::{catalog::models::ContactMessage, error::AppError};

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

fn thank_you(name: &str) -> String {
    format!("감사합니다, {name}님! 메시지가 전송되었습니다.")
}

/// A missing content type is read as JSON; any other non-JSON type is refused.
fn is_json_content(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };

    let mime = value
        .to_str()
        .unwrap_or_default()
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || mime.ends_with("+json")
}

fn unprocessable(detail: String) -> AppError {
    AppError::Validation {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        detail,
    }
}

/// Decode a contact body; every malformed or mistyped payload is a 422.
fn parse_contact(headers: &HeaderMap, body: &[u8]) -> Result<ContactMessage, AppError> {
    if !is_json_content(headers) {
        return Err(unprocessable("Expected a JSON request body".to_string()));
    }

    serde_json::from_slice(body).map_err(|e| unprocessable(e.to_string()))
}

/// POST /api/contact
pub async fn submit_contact(
    request_id: Option<Extension<RequestId>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ContactResponse>, AppError> {
    let req_id = request_id
        .as_ref()
        .and_then(|ext| ext.0.header_value().to_str().ok())
        .unwrap_or("unknown");

    let contact = parse_contact(&headers, &body).inspect_err(|e| {
        tracing::warn!(request_id = %req_id, error = %e, "rejected contact payload");
    })?;

    tracing::info!(
        target: "pm_portfolio::contact",
        request_id = %req_id,
        name = %contact.name,
        email = %contact.email,
        body = %contact.message,
        "contact message received"
    );

    Ok(Json(ContactResponse {
        success: true,
        message: thank_you(&contact.name),
    }))
}
