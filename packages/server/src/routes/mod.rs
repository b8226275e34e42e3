use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

pub fn api_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(upload_routes(config))
        .nest("/user", user_routes())
        .nest("/artist", artist_routes())
        .nest("/demo", demo_routes())
        .nest("/eval", evaluation_routes())
        .nest("/stats", stats_routes())
        .nest("/casting", casting_routes())
}

/// Served at the root, outside `/api`.
pub fn file_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::upload::serve_upload))
}

fn upload_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::upload::upload_file))
        .layer(handlers::upload::upload_body_limit(
            config.storage.max_upload_size,
        ))
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::user::add_user))
        .routes(routes!(handlers::user::login))
}

fn artist_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::artist::add_artist))
        .routes(routes!(handlers::artist::update_artist))
        .routes(routes!(handlers::artist::delete_artist))
        .routes(routes!(handlers::artist::get_artist))
}

fn demo_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::demo::add_demo))
}

fn evaluation_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::evaluation::add_evaluation))
        .routes(routes!(handlers::evaluation::list_evaluations))
}

fn stats_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::stats::latest_artists))
        .routes(routes!(handlers::stats::partnership_rank))
}

fn casting_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::casting::select_casting))
}
