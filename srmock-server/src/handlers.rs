//! Request handlers.
//!
//! Each handler parses its path segments, calls the store, and maps absence
//! or decode failures onto the registry's wire errors. Numeric segments are
//! parsed by hand rather than through typed extractors: the protocol reports
//! malformed segments as internal errors (500/50001), not bad requests.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use srmock_registry::{Schema, SubjectSchema};

use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// Response body for schema registration: only the assigned id.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Id assigned to (or already held by) the schema content.
    pub id: i32,
}

/// POST /subjects/:subject/versions
pub async fn register_schema(
    State(state): State<Arc<AppState>>,
    Path(subject): Path<String>,
    body: String,
) -> Result<Json<RegisterResponse>> {
    // Decoded by hand so a bad body maps to the wire's 500, not axum's 400.
    let schema: Schema = serde_json::from_str(&body)
        .map_err(|err| ApiError::internal(format!("invalid schema body: {err}")))?;

    let record = state.store.register(&subject, schema);
    info!(
        subject = %record.subject,
        id = record.id,
        version = record.version,
        "registered schema"
    );
    Ok(Json(RegisterResponse { id: record.id }))
}

/// GET /subjects/:subject/versions/:version
pub async fn schema_by_subject_version(
    State(state): State<Arc<AppState>>,
    Path((subject, version)): Path<(String, String)>,
) -> Result<Json<SubjectSchema>> {
    let version: i32 = version
        .parse()
        .map_err(|err| ApiError::internal(format!("invalid schema version: {err}")))?;

    let record = state
        .store
        .schema_by_subject_version(&subject, version)
        .ok_or_else(ApiError::subject_not_found)?;
    Ok(Json(record))
}

/// GET /schemas/ids/:id
pub async fn schema_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Schema>> {
    let id: i32 = id
        .parse()
        .map_err(|err| ApiError::internal(format!("invalid schema id: {err}")))?;

    let schema = state
        .store
        .schema_by_id(id)
        .ok_or_else(ApiError::schema_not_found)?;
    Ok(Json(schema))
}

/// GET /schemas/ids/:id/versions
///
/// An unknown id is not an error here; the response is an empty array.
pub async fn subject_versions_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SubjectSchema>>> {
    let id: i32 = id
        .parse()
        .map_err(|err| ApiError::internal(format!("invalid schema id: {err}")))?;

    Ok(Json(state.store.subject_versions_by_id(id)))
}

/// Fallback for unrecognized paths and wrong methods on known paths: a
/// transport-level 404 with no JSON body, distinct from the registry's
/// structured not-found errors.
pub async fn transport_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
