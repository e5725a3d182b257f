use axum::{extract::State, Json};
use serde::Serialize;

use crate::{catalog::models::Skills, state::AppState};

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Skills,
}

/// GET /api/skills - Skill categories, in display order
pub async fn list_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.catalog.list_skills().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_skills_keep_category_and_skill_order() {
        let catalog = Catalog::reference().unwrap();
        let app = Router::new()
            .route("/api/skills", get(list_skills))
            .with_state(AppState::new(catalog.clone()));

        let req = Request::get("/api/skills").body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let skills = json["skills"].as_object().unwrap();

        let names: Vec<&str> = skills.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["Product Management", "Data Analysis", "Design & Tools", "Communication"]
        );
        assert_eq!(
            skills["Design & Tools"],
            serde_json::json!(["Figma", "Notion", "Jira", "Slack", "Miro"])
        );
        for category in catalog.list_skills().categories() {
            assert_eq!(skills[&category.name], serde_json::json!(category.skills));
        }
    }
}
