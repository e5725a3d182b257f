use axum::{extract::State, response::Html};

use crate::{error::AppError, render, state::AppState};

/// GET / - Home page
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(render::home(&state.catalog)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    fn test_router() -> Router {
        let state = AppState::new(Catalog::reference().unwrap());
        Router::new().route("/", get(home)).with_state(state)
    }

    async fn get_page(app: Router) -> (StatusCode, Option<String>, String) {
        let req = Request::get("/").body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_home_returns_html() {
        let (status, content_type, body) = get_page(test_router()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("데이터 대시보드 구축"));
        assert!(body.contains("id=\"contactForm\""));
    }

    #[tokio::test]
    async fn test_home_is_byte_identical_across_requests() {
        let (_, _, first) = get_page(test_router()).await;
        let (_, _, second) = get_page(test_router()).await;
        assert_eq!(first, second);
    }
}
