use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;
use service::resources::{gallery::Gallery, products::Products, promotions::Promotions, services::Services, team::Team};

pub mod resources;
pub mod sections;
pub mod auth;
pub mod users;
pub mod upload;

use self::auth::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, content resources, sections,
/// auth/accounts and the upload-delete proxy.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .nest("/api/services", resources::resource_router::<Services>())
        .nest("/api/products", resources::resource_router::<Products>())
        .nest("/api/promotions", resources::resource_router::<Promotions>())
        .nest("/api/gallery", resources::resource_router::<Gallery>())
        .nest("/api/team", resources::resource_router::<Team>())
        .route("/api/sections", get(sections::list_sections).post(sections::seed_sections))
        .route("/api/sections/:id", put(sections::update_section))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::session))
        .route("/api/auth/users", get(users::list_users))
        .route("/api/auth/users/:id", put(users::update_user).delete(users::delete_user))
        .route("/api/uploadthing/delete", post(upload::delete_file));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // One span per request with method and path, at INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // Response line carries status and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
