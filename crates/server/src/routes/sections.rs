use axum::{extract::{Path, State}, Json};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use service::sections::{SectionRecord, MSG_SECTIONS_FETCH, MSG_SECTIONS_SEED, MSG_SECTION_UPDATE};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

/// Snapshot consumed once per public page render.
pub async fn list_sections(State(state): State<ServerState>) -> Result<Json<Vec<SectionRecord>>, JsonApiError> {
    match state.sections.list().await {
        Ok(rows) => Ok(Json(rows)),
        Err(e) => {
            error!(err = %e, "list sections failed");
            Err(JsonApiError::from_service(e, MSG_SECTIONS_FETCH))
        }
    }
}

/// Idempotent seed of the five fixed sections; never resets a toggle.
pub async fn seed_sections(State(state): State<ServerState>) -> Result<Json<Vec<SectionRecord>>, JsonApiError> {
    match state.sections.seed().await {
        Ok(rows) => Ok(Json(rows)),
        Err(e) => {
            error!(err = %e, "seed sections failed");
            Err(JsonApiError::from_service(e, MSG_SECTIONS_SEED))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SectionUpdateInput {
    pub active: Option<bool>,
}

pub async fn update_section(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SectionUpdateInput>,
) -> Result<Json<SectionRecord>, JsonApiError> {
    // A payload without `active` changes nothing and returns the current row
    let result = match input.active {
        Some(active) => state.sections.set_active(id, active).await,
        None => state.sections.get(id).await.and_then(|found| {
            found.ok_or_else(|| service::errors::ServiceError::NotFound(
                service::sections::MSG_SECTION_NOT_FOUND.into(),
            ))
        }),
    };
    match result {
        Ok(row) => Ok(Json(row)),
        Err(e) => Err(JsonApiError::from_service(e, MSG_SECTION_UPDATE)),
    }
}
