//! Catalog Models - the records served by the API and rendered on the home page.

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// One portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub year: String,
    pub tags: Vec<String>,
    pub metrics: Vec<String>,
    pub details: Vec<String>,
}

/// A named group of skills
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

impl SkillCategory {
    pub fn new(name: &str, skills: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            skills: strings(skills),
        }
    }
}

/// Skill categories in display order.
///
/// Serializes as a JSON object keyed by category name, keeping insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skills(Vec<SkillCategory>);

impl Skills {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Self(categories)
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.name, &category.skills)?;
        }
        map.end()
    }
}

/// Contact form submission. Never stored.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
