//! Tests for the assembled HTTP router.
//!
//! Requests are sent through the full router with `oneshot`, covering route registration,
//! JSON body extraction, and the documentation endpoints.

mod catalog;
mod docs;

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use holocron::server::router;
use holocron_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};

/// Builds the application router backed by the test database
fn app(test: &TestContext) -> Router {
    router::routes().with_state(test.into_app_state())
}

/// Builds a request carrying a JSON body
fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Builds a bodiless GET request
fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}
