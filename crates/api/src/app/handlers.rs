//! Expense handlers, independent of the HTTP framework.
//!
//! Each handler maps one request onto the store and classifies the outcome:
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | body does not decode | 400 | `{message: <decoder error>}` |
//! | id is not an integer | 404 | `{message: "expense not found"}` |
//! | store reports not found | 404 | `{message: "expense not found"}` |
//! | any other store error | 500 | `{message: <store error>}` |
//!
//! Nothing is retried.

use axum::http::StatusCode;
use tracing::{debug, error};

use expenses_core::{ExpenseId, NewExpense};
use expenses_infra::{ExpenseStore, ExpenseStoreError};

use crate::app::dto::ErrorBody;
use crate::app::errors::EXPENSE_NOT_FOUND;
use crate::context::RequestContext;

/// `POST /expenses`
pub async fn create_expense<C: RequestContext>(ctx: &C, store: &dyn ExpenseStore) -> C::Response {
    let draft: NewExpense = match ctx.bind() {
        Ok(draft) => draft,
        Err(e) => return bad_request(ctx, &e.to_string()),
    };

    match store.create(&draft).await {
        Ok(id) => ctx.json(StatusCode::CREATED, &draft.with_id(id)),
        Err(e) => internal_error(ctx, "create", &e),
    }
}

/// `GET /expenses/:id`
pub async fn get_expense<C: RequestContext>(ctx: &C, store: &dyn ExpenseStore) -> C::Response {
    let Some(id) = path_id(ctx) else {
        return not_found(ctx);
    };

    match store.get_by_id(id).await {
        Ok(expense) => ctx.json(StatusCode::OK, &expense),
        Err(e) => store_failure(ctx, "get_by_id", &e),
    }
}

/// `GET /expenses`
pub async fn list_expenses<C: RequestContext>(ctx: &C, store: &dyn ExpenseStore) -> C::Response {
    match store.get_all().await {
        Ok(expenses) => ctx.json(StatusCode::OK, &expenses),
        Err(e) => internal_error(ctx, "get_all", &e),
    }
}

/// `PUT /expenses/:id`
///
/// Responds with the submitted values; the id always comes from the path.
pub async fn update_expense<C: RequestContext>(ctx: &C, store: &dyn ExpenseStore) -> C::Response {
    let draft: NewExpense = match ctx.bind() {
        Ok(draft) => draft,
        Err(e) => return bad_request(ctx, &e.to_string()),
    };

    let Some(id) = path_id(ctx) else {
        return not_found(ctx);
    };

    let expense = draft.with_id(id);
    match store.update(&expense).await {
        Ok(()) => ctx.json(StatusCode::OK, &expense),
        Err(e) => store_failure(ctx, "update", &e),
    }
}

fn path_id<C: RequestContext>(ctx: &C) -> Option<ExpenseId> {
    ctx.param("id")?.parse().ok()
}

fn bad_request<C: RequestContext>(ctx: &C, message: &str) -> C::Response {
    debug!(reason = message, "rejected request body");
    ctx.json(StatusCode::BAD_REQUEST, &ErrorBody::new(message))
}

fn not_found<C: RequestContext>(ctx: &C) -> C::Response {
    ctx.json(StatusCode::NOT_FOUND, &ErrorBody::new(EXPENSE_NOT_FOUND))
}

fn internal_error<C: RequestContext>(ctx: &C, operation: &str, err: &ExpenseStoreError) -> C::Response {
    error!(operation, error = %err, "expense store failure");
    ctx.json(StatusCode::INTERNAL_SERVER_ERROR, &ErrorBody::new(err.to_string()))
}

fn store_failure<C: RequestContext>(ctx: &C, operation: &str, err: &ExpenseStoreError) -> C::Response {
    match err {
        ExpenseStoreError::NotFound(_) => not_found(ctx),
        ExpenseStoreError::Storage(_) => internal_error(ctx, operation, err),
    }
}
