//! Errors returned by request handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::db::DbError;

/// Body sent for every 5xx response; details stay in the server log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Failure of a single request.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// The client sent something unusable. The message is shown to them.
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl HandlerError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            other => {
                error!(error = %other, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn bad_request_shows_message() {
        let response = HandlerError::bad_request("newItem is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "newItem is required");
    }

    #[tokio::test]
    async fn database_error_hides_details() {
        let response = HandlerError::from(DbError::Database {
            message: "secret table layout".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, INTERNAL_ERROR_MESSAGE);
    }
}
