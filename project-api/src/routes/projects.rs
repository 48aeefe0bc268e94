use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest},
    app_state::AppState,
    domain::models::ProjectId,
};

type JsonBody<T> = WithRejection<Json<T>, ApiError>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/:project_id",
            get(get_project).put(update_project).delete(delete_project),
        )
}

fn parse_id(raw: &str) -> Result<ProjectId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("invalid project id: '{raw}'")))
}

#[instrument(name = "list_projects", skip(app_state))]
async fn list_projects(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = app_state.project_service.list_projects().await?;

    Ok(Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

#[instrument(name = "get_project", skip(app_state))]
async fn get_project(
    Path(project_id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let id = parse_id(&project_id)?;
    let project = app_state.project_service.get_project(&id).await?;

    Ok(Json(project.into()))
}

#[instrument(name = "create_project", skip(app_state))]
async fn create_project(
    State(app_state): State<AppState>,
    WithRejection(Json(body), _): JsonBody<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    body.validate()?;
    let project = app_state.project_service.create_project(body.into()).await?;

    Ok((StatusCode::CREATED, Json(project.into())))
}

#[instrument(name = "update_project", skip(app_state))]
async fn update_project(
    Path(project_id): Path<String>,
    State(app_state): State<AppState>,
    WithRejection(Json(body), _): JsonBody<UpdateProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let id = parse_id(&project_id)?;
    body.validate()?;
    let project = app_state
        .project_service
        .update_project(&id, body.into())
        .await?;

    Ok(Json(project.into()))
}

#[instrument(name = "delete_project", skip(app_state))]
async fn delete_project(
    Path(project_id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&project_id)?;
    app_state.project_service.delete_project(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
