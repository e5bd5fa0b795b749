//! Generic handlers over the `Resource` contract; one router instance per
//! content entity, all sharing the same verb plumbing.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use service::resource::Resource;

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// `?showAll=true` lets the dashboard see inactive rows too.
    #[serde(default)]
    pub show_all: Option<bool>,
}

pub async fn list<R: Resource>(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<R::Record>>, JsonApiError> {
    let include_inactive = q.show_all.unwrap_or(false);
    match R::list(&state.db, include_inactive).await {
        Ok(rows) => {
            info!(entity = R::NAME, count = rows.len(), "listed resources");
            Ok(Json(rows))
        }
        Err(e) => {
            error!(entity = R::NAME, err = %e, "list failed");
            Err(JsonApiError::from_service(e, R::MESSAGES.fetch_failed))
        }
    }
}

pub async fn create<R: Resource>(
    State(state): State<ServerState>,
    Json(input): Json<R::CreateInput>,
) -> Result<(StatusCode, Json<R::Record>), JsonApiError> {
    match R::create(&state.db, input).await {
        Ok(record) => {
            info!(entity = R::NAME, "created resource");
            Ok((StatusCode::CREATED, Json(record)))
        }
        Err(e) => Err(JsonApiError::from_service(e, R::MESSAGES.create_failed)),
    }
}

pub async fn fetch<R: Resource>(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<R::Record>, JsonApiError> {
    match R::get(&state.db, id).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err(JsonApiError::new(StatusCode::NOT_FOUND, R::MESSAGES.not_found)),
        Err(e) => Err(JsonApiError::from_service(e, R::MESSAGES.fetch_failed)),
    }
}

pub async fn update<R: Resource>(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<R::UpdateInput>,
) -> Result<Json<R::Record>, JsonApiError> {
    match R::update(&state.db, id, input).await {
        Ok(record) => {
            info!(entity = R::NAME, %id, "updated resource");
            Ok(Json(record))
        }
        Err(e) => Err(JsonApiError::from_service(e, R::MESSAGES.update_failed)),
    }
}

pub async fn remove<R: Resource>(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    match R::delete(&state.db, id).await {
        Ok(true) => {
            info!(entity = R::NAME, %id, "deleted resource");
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => Err(JsonApiError::new(StatusCode::NOT_FOUND, R::MESSAGES.not_found)),
        Err(e) => Err(JsonApiError::from_service(e, R::MESSAGES.delete_failed)),
    }
}

/// Routes for one entity, to be nested under `/api/<entity>`.
pub fn resource_router<R: Resource>() -> Router<ServerState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", get(fetch::<R>).put(update::<R>).delete(remove::<R>))
}
