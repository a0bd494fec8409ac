use axum::{extract::State, response::Json};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::database::entities::projects;
use crate::errors::{ApiError, ApiResult};
use crate::schemas::{CreateProjectRequest, ProjectListParams};
use crate::server::app::AppState;
use crate::server::middleware::{ValidatedJson, ValidatedQuery};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectList {
    pub projects: Vec<projects::Model>,
}

#[utoipa::path(
    get,
    path = "/api/projects",
    params(
        ("category" = Option<String>, Query, description = "Only projects in this category; \"All\" disables the filter"),
        ("featured" = Option<bool>, Query, description = "Only featured (or only non-featured) projects")
    ),
    responses(
        (status = 200, description = "Matching projects", body = ProjectList),
        (status = 422, description = "Invalid filter value")
    )
)]
pub async fn list_projects(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ProjectListParams>,
) -> ApiResult<Json<ProjectList>> {
    let projects = state
        .projects
        .list(&params)
        .await
        .map_err(|err| ApiError::database("Failed to fetch projects", err))?;

    Ok(Json(ProjectList { projects }))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 200, description = "Project created", body = crate::database::entities::projects::Model),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateProjectRequest>,
) -> ApiResult<Json<projects::Model>> {
    let project = state
        .projects
        .create(request)
        .await
        .map_err(|err| ApiError::database("Failed to create project", err))?;
    info!("Created project {}", project.id);

    Ok(Json(project))
}
