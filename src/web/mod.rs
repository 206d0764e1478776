pub mod routes;

use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::services::activities_service::ActivityDirectory;
use routes::{activities, activity};

/// Build the application router (separated from `main` for testing).
pub fn router(directory: ActivityDirectory, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/participants",
            delete(activity::activity_unregister_handler),
        )
        // Frontend
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(directory)
}
