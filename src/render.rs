/*!
 * Home page rendering
 * The askama template is compiled into the binary, so a missing
 * `templates/index.html` fails the build instead of a request.
 */
use askama::Template;

use crate::catalog::{
    models::{Project, SkillCategory},
    Catalog,
};
use crate::error::AppError;

#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate<'a> {
    projects: &'a [Project],
    skills: &'a [SkillCategory],
}

/// Render the home page for the given catalog snapshot.
pub fn home(catalog: &Catalog) -> Result<String, AppError> {
    let page = HomeTemplate {
        projects: catalog.list_projects(),
        skills: catalog.list_skills().categories(),
    };

    Ok(page.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Skills;

    #[test]
    fn test_home_contains_every_project_and_skill() {
        let catalog = Catalog::reference().unwrap();
        let html = home(&catalog).unwrap();

        for project in catalog.list_projects() {
            assert!(html.contains(&project.title));
            assert!(html.contains(&format!("data-project-id=\"{}\"", project.id)));
        }
        for category in catalog.list_skills().categories() {
            for skill in &category.skills {
                let escaped = skill.replace('&', "&amp;").replace('/', "&#x2f;");
                assert!(
                    html.contains(skill.as_str()) || html.contains(&escaped),
                    "missing skill {skill}"
                );
            }
        }
    }

    #[test]
    fn test_home_is_deterministic() {
        let catalog = Catalog::reference().unwrap();
        assert_eq!(home(&catalog).unwrap(), home(&catalog).unwrap());
    }

    #[test]
    fn test_home_escapes_html() {
        let project = Project {
            id: 1,
            title: "<script>alert(1)</script>".to_string(),
            description: String::new(),
            year: "2024".to_string(),
            tags: vec![],
            metrics: vec![],
            details: vec![],
        };
        let catalog = Catalog::new(vec![project], Skills::default()).unwrap();
        let html = home(&catalog).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_home_renders_empty_catalog() {
        let catalog = Catalog::new(vec![], Skills::default()).unwrap();
        let html = home(&catalog).unwrap();
        assert!(html.contains("<html"));
    }
}
