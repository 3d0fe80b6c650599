//! HTTP API for expense records: configuration, request handling, routing.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
pub mod server;
