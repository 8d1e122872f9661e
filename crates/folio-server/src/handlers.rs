use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use folio_core::{Profile, Project, Skill};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::AppState;
use crate::error::ApiError;
use crate::payload::normalize_skills;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    ok: bool,
    message: &'static str,
}

/// `POST /skills` response.
#[derive(Serialize)]
pub struct InsertedResponse {
    inserted: usize,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        message: "API is running",
    })
}

/// The first profile, or JSON `null` when none exists.
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Option<Profile>>, ApiError> {
    match state.store.first_profile() {
        Ok(profile) => Ok(Json(profile)),
        Err(e) => {
            warn!(error = %e, "failed to fetch profile");
            Err(ApiError::internal("Failed to fetch profile"))
        }
    }
}

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Project>>, ApiError> {
    match state.store.list_projects() {
        Ok(projects) => Ok(Json(projects)),
        Err(e) => {
            warn!(error = %e, "failed to fetch projects");
            Err(ApiError::internal("Failed to fetch projects"))
        }
    }
}

/// `GET /projects/` with an empty slug segment.
pub async fn missing_slug() -> ApiError {
    ApiError::bad_request("Project slug is required")
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, ApiError> {
    if slug.is_empty() {
        return Err(ApiError::bad_request("Project slug is required"));
    }

    match state.store.project_by_slug(&slug) {
        Ok(Some(project)) => Ok(Json(project)),
        Ok(None) => {
            debug!(slug = %slug, "project not found");
            Err(ApiError::not_found("Project not found"))
        }
        Err(e) => {
            warn!(error = %e, slug = %slug, "failed to fetch project");
            Err(ApiError::internal("Failed to fetch project"))
        }
    }
}

pub async fn list_skills(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Skill>>, ApiError> {
    match state.store.list_skills() {
        Ok(skills) => Ok(Json(skills)),
        Err(e) => {
            warn!(error = %e, "failed to fetch skills");
            Err(ApiError::internal("Failed to fetch skills"))
        }
    }
}

/// Accepts one skill object or an array; invalid entries are skipped.
pub async fn create_skills(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<InsertedResponse>), ApiError> {
    let skills = normalize_skills(body);

    match state.store.create_skills(&skills) {
        Ok(inserted) => {
            info!(inserted, "skills created");
            Ok((StatusCode::CREATED, Json(InsertedResponse { inserted })))
        }
        Err(e) => {
            warn!(error = %e, "failed to create skills");
            Err(ApiError::internal("Failed to create skills"))
        }
    }
}
