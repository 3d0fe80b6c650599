//! Axum adapters for the expense handlers.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Extension, Path},
    response::Response,
    routing::{get, post},
    Router,
};

use crate::app::{handlers, SharedExpenseStore};
use crate::context::AxumExchange;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_expense).get(list_expenses))
        .route("/:id", get(get_expense).put(update_expense))
}

type PathParams = Result<Path<HashMap<String, String>>, PathRejection>;

// A path that fails to decode is treated like a non-integer id.
fn params(path: PathParams) -> HashMap<String, String> {
    path.map(|Path(p)| p).unwrap_or_default()
}

pub async fn create_expense(
    Extension(store): Extension<SharedExpenseStore>,
    body: Bytes,
) -> Response {
    let ctx = AxumExchange::new(HashMap::new(), body);
    handlers::create_expense(&ctx, store.as_ref()).await
}

pub async fn list_expenses(Extension(store): Extension<SharedExpenseStore>) -> Response {
    let ctx = AxumExchange::default();
    handlers::list_expenses(&ctx, store.as_ref()).await
}

pub async fn get_expense(
    Extension(store): Extension<SharedExpenseStore>,
    path: PathParams,
) -> Response {
    let ctx = AxumExchange::new(params(path), Bytes::new());
    handlers::get_expense(&ctx, store.as_ref()).await
}

pub async fn update_expense(
    Extension(store): Extension<SharedExpenseStore>,
    path: PathParams,
    body: Bytes,
) -> Response {
    let ctx = AxumExchange::new(params(path), body);
    handlers::update_expense(&ctx, store.as_ref()).await
}
