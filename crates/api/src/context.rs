//! Request context: one inbound HTTP exchange as seen by a handler.
//!
//! Handlers only bind a JSON body, read path parameters and write a JSON
//! response. Keeping that behind [`RequestContext`] lets the same handler run
//! under axum (via [`AxumExchange`]) and under a recording test context.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// The request body could not be decoded into the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct BindError(String);

impl BindError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Abstraction over one request/response exchange.
pub trait RequestContext {
    /// What writing a response produces.
    type Response;

    /// Raw value of a named path parameter, if the route captured one.
    fn param(&self, name: &str) -> Option<&str>;

    /// Decode the JSON request body.
    fn bind<T: DeserializeOwned>(&self) -> Result<T, BindError>;

    /// Serialize `body` as JSON with the given status.
    fn json<T: Serialize>(&self, status: StatusCode, body: &T) -> Self::Response;
}

/// [`RequestContext`] over an axum request whose parts were already extracted.
#[derive(Debug, Default)]
pub struct AxumExchange {
    params: HashMap<String, String>,
    body: Bytes,
}

impl AxumExchange {
    pub fn new(params: HashMap<String, String>, body: Bytes) -> Self {
        Self { params, body }
    }
}

impl RequestContext for AxumExchange {
    type Response = Response;

    fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn bind<T: DeserializeOwned>(&self) -> Result<T, BindError> {
        serde_json::from_slice(&self.body).map_err(|e| BindError::new(e.to_string()))
    }

    fn json<T: Serialize>(&self, status: StatusCode, body: &T) -> Response {
        (status, Json(body)).into_response()
    }
}
