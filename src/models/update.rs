//! News-feed updates, kept newest first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{parse_calendar_date, require, require_date, Collection, Record};

/// What an update is about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpdateType {
    Course,
    Certificate,
    Project,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Update {
    pub id: String,
    pub title: String,
    pub date: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: UpdateType,
}

impl Record for Update {
    const COLLECTION: Collection = Collection::Updates;
    const LABEL: &'static str = "update";

    fn check(&self) -> Result<(), String> {
        require("id", &self.id)?;
        require("title", &self.title)?;
        require("content", &self.content)?;
        require_date("date", &self.date)
    }

    fn identity(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn canonical_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }
}
