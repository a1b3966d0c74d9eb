//! Public page view endpoints.

use axum::extract::{Path, State};
use axum::Json;

use super::ApiResult;
use crate::models::{Certificate, Education, OnlineCourse, Project, Skill};
use crate::sync;
use crate::views::{self, EducationPage, Highlights, SkillGroup};
use crate::AppState;

/// GET /api/data/projects/tags - Distinct project tags, sorted.
pub async fn project_tags(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let projects = sync::read_collection::<Project>(&state.store).await?;
    Ok(Json(views::project_tags(&projects)))
}

/// GET /api/data/projects/tags/{tag} - Projects carrying one tag.
pub async fn projects_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> ApiResult<Vec<Project>> {
    let projects = sync::read_collection::<Project>(&state.store).await?;
    let tagged: Vec<Project> = views::projects_tagged(&projects, &tag)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(tagged))
}

/// GET /api/data/skills/grouped - Skills per category, strongest first.
pub async fn grouped_skills(State(state): State<AppState>) -> ApiResult<Vec<SkillGroup>> {
    let skills = sync::read_collection::<Skill>(&state.store).await?;
    Ok(Json(views::group_skills(&skills)))
}

/// GET /api/data/highlights - Home page highlights.
pub async fn highlights(State(state): State<AppState>) -> ApiResult<Highlights> {
    let (projects, skills) = tokio::try_join!(
        sync::read_collection::<Project>(&state.store),
        sync::read_collection::<Skill>(&state.store),
    )?;
    Ok(Json(views::highlights(&projects, &skills)))
}

/// GET /api/data/education/page - Education page with certificates and courses grouped.
pub async fn education_page(State(state): State<AppState>) -> ApiResult<EducationPage> {
    let (education, certificates, courses) = tokio::try_join!(
        sync::read_collection::<Education>(&state.store),
        sync::read_collection::<Certificate>(&state.store),
        sync::read_collection::<OnlineCourse>(&state.store),
    )?;
    Ok(Json(views::education_page(&education, &certificates, &courses)))
}
