//! Authorization gate.
//!
//! Every request must carry an `Authorization` header whose value is exactly
//! the configured token. There are no exempt routes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::app::errors;

#[derive(Clone)]
pub struct AuthState {
    token: Arc<str>,
}

impl AuthState {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::from(token.into()),
        }
    }

    /// Exact, case-sensitive comparison of the raw header value.
    pub fn accepts(&self, headers: &HeaderMap) -> bool {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == &*self.token)
    }
}

pub async fn auth_middleware(State(state): State<AuthState>, req: Request, next: Next) -> Response {
    if !state.accepts(req.headers()) {
        tracing::warn!(method = %req.method(), path = %req.uri().path(), "unauthorized request");
        return errors::json_error(StatusCode::UNAUTHORIZED, errors::UNAUTHORIZED);
    }

    next.run(req).await
}
