use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::app::dto::ErrorBody;

/// Message for both a missing record and an id that is not an integer.
pub const EXPENSE_NOT_FOUND: &str = "expense not found";

/// Message returned by the authorization gate.
pub const UNAUTHORIZED: &str = "Unauthorized";

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

/// Response for a handler panic caught by the panic layer.
pub fn panic_response(_panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
}
