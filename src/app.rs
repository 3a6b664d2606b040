use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;

/// Builds the application router with all routes and middleware layers.
pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::liveness::check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Customize this for production security
}
