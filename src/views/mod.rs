//! Read-only derivations the public pages render from stored collections.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::{
    Certificate, Education, OnlineCourse, Proficiency, Project, Skill, SkillCategory,
};

/// Issuer marker for the professional certificate programs listed first.
const PROFESSIONAL_ISSUER: &str = "coursera";

/// Skills listed under one category heading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub label: &'static str,
    pub skills: Vec<Skill>,
}

/// Home page highlights.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlights {
    pub featured_projects: Vec<Project>,
    pub expert_skills: Vec<Skill>,
}

/// Courses taken on one platform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformGroup {
    pub platform: String,
    pub courses: Vec<OnlineCourse>,
}

/// Education page: degrees, certificates split by issuer, courses per platform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPage {
    pub education: Vec<Education>,
    pub professional_certificates: Vec<Certificate>,
    pub other_certificates: Vec<Certificate>,
    pub course_platforms: Vec<PlatformGroup>,
}

/// Every distinct project tag, sorted, for the projects page filter bar.
pub fn project_tags(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Projects carrying `tag`, in stored order.
pub fn projects_tagged<'a>(projects: &'a [Project], tag: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| p.tags().iter().any(|t| t == tag))
        .collect()
}

/// Group skills under each category they list, strongest first within a group.
///
/// A skill with several categories appears in each group. Empty groups are omitted.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup> {
    SkillCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let mut members: Vec<Skill> = skills
                .iter()
                .filter(|s| s.categories.contains(&category))
                .cloned()
                .collect();
            if members.is_empty() {
                return None;
            }
            members.sort_by_key(|s| s.proficiency.rank());
            Some(SkillGroup {
                category,
                label: category.label(),
                skills: members,
            })
        })
        .collect()
}

/// Featured projects and expert skills.
pub fn highlights(projects: &[Project], skills: &[Skill]) -> Highlights {
    Highlights {
        featured_projects: projects.iter().filter(|p| p.is_featured()).cloned().collect(),
        expert_skills: skills
            .iter()
            .filter(|s| s.proficiency == Proficiency::Expert)
            .cloned()
            .collect(),
    }
}

fn is_professional(cert: &Certificate) -> bool {
    cert.issuer.to_lowercase().contains(PROFESSIONAL_ISSUER)
}

/// Group courses by platform, platforms in order of first appearance.
pub fn group_courses(courses: &[OnlineCourse]) -> Vec<PlatformGroup> {
    let mut groups: Vec<PlatformGroup> = Vec::new();
    for course in courses {
        match groups.iter_mut().find(|g| g.platform == course.platform) {
            Some(group) => group.courses.push(course.clone()),
            None => groups.push(PlatformGroup {
                platform: course.platform.clone(),
                courses: vec![course.clone()],
            }),
        }
    }
    groups
}

/// Assemble the education page from stored (canonically ordered) collections.
pub fn education_page(
    education: &[Education],
    certificates: &[Certificate],
    courses: &[OnlineCourse],
) -> EducationPage {
    let (professional_certificates, other_certificates): (Vec<_>, Vec<_>) =
        certificates.iter().cloned().partition(is_professional);
    EducationPage {
        education: education.to_vec(),
        professional_certificates,
        other_certificates,
        course_platforms: group_courses(courses),
    }
}
