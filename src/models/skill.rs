//! Skills with a proficiency level and one or more categories.

use serde::{Deserialize, Serialize};

use super::{require, Collection, Record};

/// How well a skill is known, strongest first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl Proficiency {
    /// Display rank, 0 for expert.
    pub fn rank(&self) -> u8 {
        match self {
            Proficiency::Expert => 0,
            Proficiency::Advanced => 1,
            Proficiency::Intermediate => 2,
            Proficiency::Beginner => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Language,
    Framework,
    Tool,
    Soft,
    Database,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Language,
        SkillCategory::Framework,
        SkillCategory::Tool,
        SkillCategory::Soft,
        SkillCategory::Database,
        SkillCategory::Other,
    ];

    /// Heading shown on the skills page.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Language => "Programming Languages",
            SkillCategory::Framework => "Frameworks & Libraries",
            SkillCategory::Tool => "Tools & Technologies",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Database => "Databases",
            SkillCategory::Other => "Other Skills",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub proficiency: Proficiency,
    pub categories: Vec<SkillCategory>,
}

impl Record for Skill {
    const COLLECTION: Collection = Collection::Skills;
    const LABEL: &'static str = "skill";

    fn check(&self) -> Result<(), String> {
        require("name", &self.name)?;
        if self.categories.is_empty() {
            return Err("`categories` must list at least one category".to_string());
        }
        Ok(())
    }

    fn identity(&self) -> Option<&str> {
        Some(&self.name)
    }
}
