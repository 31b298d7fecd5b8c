//! Router assembly: operational routes at the root, blog routes under `/api/v1`, plus middleware.

mod blog;
mod common;

pub use blog::blog_routes;
pub use common::common_routes_with_ready;

use crate::config::AppConfig;
use crate::cors::create_cors;
use crate::error::AppError;
use crate::state::AppState;
use crate::telemetry::trace_layer;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

pub const API_PREFIX: &str = "/api/v1";

pub fn app_router(state: AppState, config: &AppConfig) -> Result<Router, AppError> {
    let middleware = ServiceBuilder::new()
        .layer(trace_layer())
        .layer(create_cors(&config.cors)?)
        // Innermost so it answers 408 with the router's own body type.
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    Ok(Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest(API_PREFIX, blog_routes(state))
        // Enforced by the body extractors, so oversize bodies surface as `AppError::PayloadTooLarge`.
        .layer(DefaultBodyLimit::max(config.server.body_limit_bytes))
        .layer(middleware))
}
