use axum::Router;

pub mod expenses;

/// Router for every endpoint (all of them sit behind the authorization gate).
pub fn router() -> Router {
    Router::new().nest("/expenses", expenses::router())
}
