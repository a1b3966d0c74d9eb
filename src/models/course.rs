//! Online courses, kept newest first by start date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{parse_calendar_date, require, require_date, Collection, Record};

/// A course taken on an online learning platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineCourse {
    pub name: String,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    pub start_date: String,
    /// Absent while the course is ongoing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub completed: bool,
}

impl Record for OnlineCourse {
    const COLLECTION: Collection = Collection::OnlineCourses;
    const LABEL: &'static str = "course";

    fn check(&self) -> Result<(), String> {
        require("name", &self.name)?;
        require("platform", &self.platform)?;
        require("description", &self.description)?;
        require_date("startDate", &self.start_date)?;
        match self.end_date.as_deref() {
            Some(end) if !end.trim().is_empty() => require_date("endDate", end),
            _ => Ok(()),
        }
    }

    fn canonical_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.start_date)
    }
}
