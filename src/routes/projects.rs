use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db;
use crate::db::projects::SortDate;
use crate::error::AppError;
use crate::models::{Project, ProjectDetail, ProjectMember};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub sorted_date: Option<String>,
}

#[derive(Serialize)]
pub struct ProjectPage {
    pub page: u32,
    pub total: i64,
    pub list: Vec<ProjectDetail>,
}

pub async fn list(
    state: State<SharedState>,
    params: Query<ListParams>,
) -> Result<Json<ProjectPage>, AppError> {
    list_page(state, Path(1), params).await
}

pub async fn list_page(
    State(state): State<SharedState>,
    Path(page): Path<u32>,
    Query(params): Query<ListParams>,
) -> Result<Json<ProjectPage>, AppError> {
    let per_page = i64::from(state.config.per_page);
    let offset = page_offset(page, per_page);
    let sort = SortDate::parse(params.sorted_date.as_deref());

    let projects = db::projects::list_page(&state.pool, sort, per_page, offset).await?;
    let total = db::projects::count_all(&state.pool).await?;

    let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
    let members = db::user_projects::members_of(&state.pool, &ids).await?;

    tracing::debug!(page, total, returned = projects.len(), ?sort, "Listed projects");

    Ok(Json(ProjectPage {
        page,
        total,
        list: with_members(projects, members),
    }))
}

/// Rows to skip for a 1-based page. Page 0 reads as page 1.
fn page_offset(page: u32, per_page: i64) -> i64 {
    (i64::from(page.max(1)) - 1).saturating_mul(per_page)
}

/// Attaches member rows to their projects, keeping the project order.
fn with_members(projects: Vec<Project>, members: Vec<ProjectMember>) -> Vec<ProjectDetail> {
    let mut by_project: HashMap<i32, Vec<_>> = HashMap::new();
    for member in members {
        by_project.entry(member.project_id).or_default().push(member.user);
    }

    projects
        .into_iter()
        .map(|project| {
            let users = by_project.remove(&project.id).unwrap_or_default();
            ProjectDetail::new(project, users)
        })
        .collect()
}
