//! Portfolio projects.

use serde::{Deserialize, Serialize};

use super::{require, Collection, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Project {
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

impl Record for Project {
    const COLLECTION: Collection = Collection::Projects;
    const LABEL: &'static str = "project";

    fn check(&self) -> Result<(), String> {
        require("id", &self.id)?;
        require("title", &self.title)?;
        require("description", &self.description)
    }

    fn identity(&self) -> Option<&str> {
        Some(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{duplicate_identities, validate_batch};

    #[test]
    fn test_optional_fields_stay_absent() {
        let input = json!([{ "id": "project-1", "title": "Ticketing", "description": "C# help desk" }]);
        let projects = validate_batch::<Project>(input.clone()).unwrap();

        assert!(projects[0].tags().is_empty());
        assert!(!projects[0].is_featured());
        assert_eq!(serde_json::to_value(&projects).unwrap(), input);
    }

    #[test]
    fn test_requires_id() {
        assert!(validate_batch::<Project>(json!([
            { "id": "", "title": "Ticketing", "description": "C# help desk" }
        ]))
        .is_err());
    }

    #[test]
    fn test_duplicate_ids_are_reported_once() {
        let projects = validate_batch::<Project>(json!([
            { "id": "p1", "title": "A", "description": "a" },
            { "id": "p2", "title": "B", "description": "b" },
            { "id": "p1", "title": "C", "description": "c" },
            { "id": "p1", "title": "D", "description": "d" }
        ]))
        .unwrap();

        assert_eq!(duplicate_identities(&projects), vec!["p1".to_string()]);
    }
}
