mod items;
mod lists;
mod system;


use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub use items::*;
pub use lists::*;
pub use system::*;

/// A 302 redirect to `location`.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
