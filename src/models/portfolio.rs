//! Aggregate of every collection, as returned by `GET /api/data`.

use serde::{Deserialize, Serialize};

use super::{Certificate, Education, OnlineCourse, Project, Skill, Update};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub education: Vec<Education>,
    pub certificates: Vec<Certificate>,
    pub online_courses: Vec<OnlineCourse>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub updates: Vec<Update>,
}
