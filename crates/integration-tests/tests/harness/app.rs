//! Small project service classifying its failures the way a real one would

use std::io;

use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use faultline_error::{AggregateError, ErrorKind, Fault, ResultExt};
use faultline_server::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Only project that can be loaded
pub const DEMO_PROJECT: &str = "DEMO";

/// Stand-in for third-party code that calls back into the service
pub mod vendor {
    /// Lend a pooled connection to `f`
    #[inline(never)]
    pub fn with_connection<T>(f: impl FnOnce(&str) -> T) -> T {
        f("db-1")
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub key: String,
}

#[derive(Debug, Deserialize)]
struct ImportRequest {
    keys: Vec<String>,
}

#[inline(never)]
fn fetch_row(connection: &str, key: &str) -> Result<Project, io::Error> {
    if key == DEMO_PROJECT {
        return Ok(Project { key: key.to_owned() });
    }

    Err(io::Error::new(
        io::ErrorKind::ConnectionRefused,
        format!("connection refused by {connection}"),
    ))
}

#[inline(never)]
fn load_project(key: &str) -> Result<Project, Fault> {
    vendor::with_connection(|connection| fetch_row(connection, key).wrap(format!("loading project {key}")))
}

async fn get_project(Path(key): Path<String>) -> Result<Json<Project>, ApiError> {
    let project = load_project(&key).classify(ErrorKind::NOT_FOUND)?;
    Ok(Json(project))
}

async fn import_projects(Json(request): Json<ImportRequest>) -> Result<Json<Vec<Project>>, ApiError> {
    let mut failures = AggregateError::new();
    let projects = request
        .keys
        .iter()
        .filter_map(|key| failures.append_result(load_project(key)))
        .collect();

    failures.into_result()?;
    Ok(Json(projects))
}

async fn project_settings(Path(key): Path<String>) -> Result<Json<Project>, ApiError> {
    Err(ApiError::from(
        Fault::from(ErrorKind::FORBIDDEN).with_data(json!({ "project": key })),
    ))
}

async fn read_audit_log() -> Result<String, ApiError> {
    Ok(std::fs::read_to_string("/nonexistent/faultline/audit.log")?)
}

/// Routes of the sample service
pub fn router() -> Router {
    Router::new()
        .route("/projects/{key}", get(get_project))
        .route("/projects/{key}/settings", get(project_settings))
        .route("/projects/import", post(import_projects))
        .route("/audit", get(read_audit_log))
        .route("/health", get(|| async { "ok" }))
}
