//! Education history entries.

use serde::{Deserialize, Serialize};

use super::{require, Collection, Record};

/// A degree or program on the education page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    /// Free-form, e.g. "2020 - 2024"
    pub date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl Record for Education {
    const COLLECTION: Collection = Collection::Education;
    const LABEL: &'static str = "education entry";

    fn check(&self) -> Result<(), String> {
        require("degree", &self.degree)?;
        require("institution", &self.institution)?;
        require("location", &self.location)?;
        require("date", &self.date)?;
        require("description", &self.description)
    }
}
