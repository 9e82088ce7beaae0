use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rand::{Rng, distr::Alphanumeric};

pub fn generate_state(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

// Axum's Redirect emits 303/307/308; the browser-facing flow uses a plain
// found redirect throughout.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

pub fn origin_with_error(origin: &str, error: &str) -> String {
    format!("{}?error={}", origin, urlencoding::encode(error))
}
