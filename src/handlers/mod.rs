mod info;
mod query;

pub use info::beacon_info;
pub use query::{get_query, post_query};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub beacon_id: String,
    pub organization: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(beacon_info))
        .route("/info", get(beacon_info))
        .route("/query", get(get_query).post(post_query))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
