//! HTTP API application wiring (Axum router + store wiring).
//!
//! - `handlers.rs`: framework-independent request handling over `RequestContext`
//! - `routes/`: axum adapters and route table
//! - `dto.rs`: response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use expenses_infra::ExpenseStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;

/// The store as shared by every request.
pub type SharedExpenseStore = Arc<dyn ExpenseStore>;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(store: SharedExpenseStore, auth_token: impl Into<String>) -> Router {
    let auth_state = middleware::AuthState::new(auth_token);

    routes::router()
        .layer(Extension(store))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(errors::panic_response)),
        )
}
