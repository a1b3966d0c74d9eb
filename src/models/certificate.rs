//! Earned certificates.

use serde::{Deserialize, Serialize};

use super::{require, Collection, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Record for Certificate {
    const COLLECTION: Collection = Collection::Certificates;
    const LABEL: &'static str = "certificate";

    fn check(&self) -> Result<(), String> {
        require("name", &self.name)?;
        require("issuer", &self.issuer)?;
        require("date", &self.date)
    }

    fn identity(&self) -> Option<&str> {
        Some(&self.name)
    }
}
