use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use service::upload::file_key_from_url;

use crate::routes::auth::{has_valid_session, ServerState};

/// Accepts either the raw file key or the stored public URL; the key is the
/// substring after the last `/` of the URL.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileInput {
    pub file_key: Option<String>,
    pub file_url: Option<String>,
}

// This route keeps the dashboard's `{ "error": ... }` body shape.
pub async fn delete_file(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<DeleteFileInput>,
) -> Response {
    if !has_valid_session(&state, &jar) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Não autorizado" }))).into_response();
    }

    let key = input
        .file_key
        .filter(|k| !k.trim().is_empty())
        .or_else(|| input.file_url.as_deref().and_then(file_key_from_url).map(str::to_string));
    let Some(key) = key else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "A chave do arquivo é obrigatória" }))).into_response();
    };

    match state.upload.delete_file(&key).await {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(e) => {
            error!(err = %e, "upload delete failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Erro ao deletar o arquivo" }))).into_response()
        }
    }
}
