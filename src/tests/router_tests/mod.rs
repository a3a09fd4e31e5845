mod api_tests;
mod favorite_tests;
mod listing_tests;

use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};

/// Percent-encode a query value so non-ASCII labels fit in a URI.
pub fn enc(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

pub fn get(state: &AppState, uri: &str) -> Result<Response, ServerError> {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, state)
}
