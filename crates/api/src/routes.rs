use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/dns-query",
            get(handlers::dns_query_get).post(handlers::dns_query_post),
        )
        .route(
            "/resolve",
            get(handlers::dns_query_get).post(handlers::dns_query_post),
        )
        .route("/status", get(handlers::get_status))
        .route("/config", get(handlers::get_config))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
