//! API route modules
//!
//! | module | path |
//! |--------|------|
//! | [`health`] | `GET /health` |
//! | [`employees`] | `/api/v1/employees` CRUD |

pub mod employees;
pub mod extract;
pub mod health;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

/// HTTP access log middleware
async fn log_request(
    request: axum::extract::Request,
    next: middleware::Next,
) -> axum::response::Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();
    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(employees::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}
