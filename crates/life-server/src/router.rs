//! Axum router construction for the static file server.
//!
//! Two routes and nothing else:
//!
//! - `GET /` -- the HTML entry page
//! - `GET /public/*` -- files under the asset directory
//!
//! Any other path, and any asset that does not exist, is a 404.

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the router serving the entry page and the asset directory.
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(&config.index))
        .nest_service("/public", ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http())
}
