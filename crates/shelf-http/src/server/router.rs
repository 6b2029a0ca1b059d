//! Route table and tower layers

use crate::handlers::{
    health_check, list_resources, not_found, show_form, submit_resource, AppState,
};
use axum::routing::get;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the application router around `state`
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        .route("/", get(show_form).post(submit_resource))
        .route("/api/resources", get(list_resources))
        .route(&config.health_check_path, get(health_check))
        .fallback(not_found)
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(config.max_request_size))
        .layer(TimeoutLayer::new(config.request_timeout()));

    if config.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}
