use axum::Router;
use axum_helpers::server::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod customers;
pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/customers", customers::router(state))
}

/// Creates a router with the /ready endpoint that performs a real database check.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// The complete application: `/api/customers/...`, `/health`, `/ready`
/// and the docs, all behind the shared middleware stack.
pub fn app(state: &AppState) -> Router {
    let probes = health_router().merge(ready_router(state.clone()));
    create_router::<ApiDoc>(routes(state), probes, state.config.server.request_timeout)
}
