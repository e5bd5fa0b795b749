use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::{error, info};
use uuid::Uuid;

use service::users::{self, UserRecord, UserUpdateInput, MSG_USERS_FETCH, MSG_USER_DELETE, MSG_USER_NOT_FOUND, MSG_USER_UPDATE};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

pub async fn list_users(State(state): State<ServerState>) -> Result<Json<Vec<UserRecord>>, JsonApiError> {
    match users::list_users(&state.db).await {
        Ok(rows) => Ok(Json(rows)),
        Err(e) => {
            error!(err = %e, "list users failed");
            Err(JsonApiError::from_service(e, MSG_USERS_FETCH))
        }
    }
}

pub async fn update_user(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UserUpdateInput>,
) -> Result<Json<UserRecord>, JsonApiError> {
    match users::update_user(&state.db, id, input).await {
        Ok(user) => {
            info!(%id, "updated user");
            Ok(Json(user))
        }
        Err(e) => Err(JsonApiError::from_service(e, MSG_USER_UPDATE)),
    }
}

pub async fn delete_user(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    match users::delete_user(&state.db, id).await {
        Ok(true) => {
            info!(%id, "deleted user");
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => Err(JsonApiError::new(StatusCode::NOT_FOUND, MSG_USER_NOT_FOUND)),
        Err(e) => Err(JsonApiError::from_service(e, MSG_USER_DELETE)),
    }
}
