pub mod config;
pub mod database;
pub mod domain;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod utils;

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Talent Agency Admin API",
        version = "1.0.0",
        description = "Back-office API for managing artists, their demos and director evaluations. \
            Every `/api` endpoint answers with a `{code, msg, data}` envelope; `code` is 0 on success."
    ),
    tags(
        (name = "Files", description = "Media upload and download"),
        (name = "Users", description = "Back-office accounts"),
        (name = "Artists", description = "Artist records"),
        (name = "Demos", description = "Demo registration"),
        (name = "Evaluations", description = "Director evaluations"),
        (name = "Stats", description = "Novice listing and veteran ranking"),
        (name = "Casting", description = "Demo selection for castings"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routes::api_routes(&state.config))
        .merge(routes::file_routes())
        .split_for_parts();

    let cors = cors_layer(&state.config.server.cors);

    let router = router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
        .layer(TraceLayer::new_for_http());

    match cors {
        Some(layer) => router.layer(layer),
        None => router,
    }
}

/// `None` when no origin is configured. `"*"` allows any origin.
fn cors_layer(cors: &CorsConfig) -> Option<CorsLayer> {
    if cors.allow_origins.is_empty() {
        return None;
    }

    let origins = if cors.allow_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = cors
            .allow_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
            .max_age(Duration::from_secs(cors.max_age)),
    )
}
