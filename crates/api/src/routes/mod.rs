//! HTTP route definitions

pub mod billing;
pub mod health;


use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{auth::require_bearer, state::AppState};

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let billing_routes = Router::new()
        .route("/subscription", get(billing::get_subscription))
        .route("/customer-session", post(billing::create_customer_session))
        .route("/portal", post(billing::create_portal_session))
        .route("/usage", get(billing::get_usage))
        .layer(middleware::from_fn(require_bearer));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(billing_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
