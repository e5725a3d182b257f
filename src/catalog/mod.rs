//! Catalog - the read-only project and skill data behind the site.
//!
//! Built once at startup and shared with handlers behind an `Arc`.

pub mod models;

use std::collections::HashSet;
use thiserror::Error;

use models::{strings, Project, SkillCategory, Skills};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Project not found")]
    NotFound,

    #[error("duplicate project id {0}")]
    DuplicateProjectId(i64),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    skills: Skills,
}

impl Catalog {
    /// Build a catalog, rejecting project lists with repeated ids.
    pub fn new(projects: Vec<Project>, skills: Skills) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateProjectId(project.id));
            }
        }

        Ok(Self { projects, skills })
    }

    /// The catalog shown on the live site.
    pub fn reference() -> Result<Self, CatalogError> {
        Self::new(reference_projects(), reference_skills())
    }

    pub fn list_projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get_project(&self, id: i64) -> Result<&Project, CatalogError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound)
    }

    pub fn list_skills(&self) -> &Skills {
        &self.skills
    }
}

// ============================================================================
// Reference Data
// ============================================================================

fn project(
    id: i64,
    title: &str,
    description: &str,
    year: &str,
    tags: &[&str],
    metrics: &[&str],
    details: &[&str],
) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        year: year.to_string(),
        tags: strings(tags),
        metrics: strings(metrics),
        details: strings(details),
    }
}

fn reference_projects() -> Vec<Project> {
    vec![
        project(
            1,
            "모바일 앱 사용성 개선 프로젝트",
            "사용자 이탈률 25% 감소 및 DAU 35% 증가",
            "2024",
            &["UX/UI", "데이터 분석", "A/B 테스팅"],
            &["📈 DAU +35%", "📉 이탈률 -25%"],
            &[
                "사용자 인터뷰 및 A/B 테스트를 통한 온보딩 프로세스 개선",
                "GA4 데이터 분석으로 핵심 이탈 지점 파악 및 개선",
                "개발팀과 협업하여 3주 내 MVP 출시",
            ],
        ),
        project(
            2,
            "신규 기능 런칭 프로젝트",
            "사용자 요구사항 기반 신규 기능 기획 및 출시",
            "2024",
            &["기획", "PRD", "애자일"],
            &["👥 참여율 +42%", "⭐ 만족도 4.5/5"],
            &[
                "사용자 설문 및 VOC 분석으로 Pain Point 도출",
                "PRD 작성 및 와이어프레임 제작",
                "애자일 방식으로 2개월 내 성공적 출시",
            ],
        ),
        project(
            3,
            "데이터 대시보드 구축",
            "실시간 지표 모니터링 시스템 구축",
            "2023",
            &["데이터", "대시보드", "KPI"],
            &["⚡ 의사결정 속도 +50%", "📊 실시간 모니터링"],
            &[
                "핵심 지표(KPI) 정의 및 대시보드 설계",
                "Tableau를 활용한 시각화 및 자동화",
                "의사결정 속도 50% 단축",
            ],
        ),
    ]
}

fn reference_skills() -> Skills {
    Skills::new(vec![
        SkillCategory::new(
            "Product Management",
            &["PRD 작성", "사용자 리서치", "로드맵 수립", "A/B 테스팅", "애자일/스크럼"],
        ),
        SkillCategory::new(
            "Data Analysis",
            &["Google Analytics 4", "Mixpanel", "Tableau", "SQL", "Excel/Google Sheets"],
        ),
        SkillCategory::new("Design & Tools", &["Figma", "Notion", "Jira", "Slack", "Miro"]),
        SkillCategory::new(
            "Communication",
            &["이해관계자 관리", "프레젠테이션", "문서화", "팀 협업", "영어 커뮤니케이션"],
        ),
    ])
}
