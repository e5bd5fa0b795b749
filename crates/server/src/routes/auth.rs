use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use service::auth::{
    domain::{LoginInput, RegisterInput},
    errors::AuthError,
    service::{verify_token, AuthConfig, AuthService},
};
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::sections::SectionStore;
use service::upload::UploadClient;
use std::sync::Arc;

use crate::errors::JsonApiError;

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
    pub session_ttl_hours: i64,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
    pub sections: SectionStore,
    pub upload: UploadClient,
}

impl ServerState {
    fn auth_service(&self) -> AuthService<SeaOrmAuthRepository> {
        let repo = Arc::new(SeaOrmAuthRepository { db: self.db.clone() });
        AuthService::new(repo, AuthConfig {
            jwt_secret: Some(self.auth.jwt_secret.clone()),
            session_ttl_hours: self.auth.session_ttl_hours,
            password_algorithm: "argon2".into(),
        })
    }
}

#[derive(Serialize)]
pub struct RegisterOutput { pub user_id: Uuid }

#[derive(Serialize)]
pub struct MeOutput { pub user_id: Uuid, pub email: String, pub name: String }

/// Auth failures share the `{ "message": ... }` envelope of every other route.
fn auth_error(e: AuthError) -> JsonApiError {
    let status = match &e {
        AuthError::Validation(_) => StatusCode::BAD_REQUEST,
        AuthError::Conflict => StatusCode::CONFLICT,
        AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    JsonApiError::new(status, e.to_string())
}

pub async fn register(State(state): State<ServerState>, Json(input): Json<RegisterInput>) -> Result<Json<RegisterOutput>, JsonApiError> {
    let svc = state.auth_service();
    let user = svc.register(input).await.map_err(auth_error)?;
    Ok(Json(RegisterOutput { user_id: user.id }))
}

pub async fn login(State(state): State<ServerState>, jar: CookieJar, Json(input): Json<LoginInput>) -> Result<(CookieJar, Json<MeOutput>), JsonApiError> {
    let svc = state.auth_service();
    let session = svc
        .login(input)
        .await
        .map_err(|e| JsonApiError::new(StatusCode::UNAUTHORIZED, e.to_string()))?;
    let user = session.user;
    if let Some(token) = session.token {
        let mut cookie = Cookie::new(AUTH_COOKIE, token);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_secure(false);
        cookie.set_same_site(SameSite::Lax);
        let jar = jar.add(cookie);
        let me = MeOutput { user_id: user.id, email: user.email, name: user.name };
        return Ok((jar, Json(me)));
    }
    Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "token generation failed"))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    // Removal must carry the same path as the login cookie
    let mut cookie = Cookie::from(AUTH_COOKIE);
    cookie.set_path("/");
    let jar = jar.remove(cookie);
    (jar, StatusCode::NO_CONTENT)
}

/// Decode the cookie and echo the session claims; 401 without a valid token.
pub async fn session(State(state): State<ServerState>, jar: CookieJar) -> Result<Json<serde_json::Value>, JsonApiError> {
    let Some(cookie) = jar.get(AUTH_COOKIE) else {
        return Err(JsonApiError::new(StatusCode::UNAUTHORIZED, "no auth"));
    };
    let claims = verify_token(&state.auth.jwt_secret, cookie.value())
        .map_err(|e| JsonApiError::new(StatusCode::UNAUTHORIZED, e.to_string()))?;
    Ok(Json(serde_json::json!({ "user_id": claims.uid, "email": claims.sub })))
}

/// Shared guard for routes that require a logged-in dashboard session.
pub fn has_valid_session(state: &ServerState, jar: &CookieJar) -> bool {
    jar.get(AUTH_COOKIE)
        .map(|c| verify_token(&state.auth.jwt_secret, c.value()).is_ok())
        .unwrap_or(false)
}
