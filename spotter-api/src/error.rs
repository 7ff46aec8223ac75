use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    MissingParameters,
    AuthFailed(String),
    Upstream(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingParameters => (
                StatusCode::BAD_REQUEST,
                "Missing required parameters".to_string(),
            ),
            AppError::AuthFailed(reason) => {
                tracing::error!("Amadeus authentication failed: {}", reason);
                (
                    StatusCode::UNAUTHORIZED,
                    "Failed to authenticate with Amadeus API".to_string(),
                )
            }
            AppError::Upstream(reason) => {
                tracing::error!("Flight offer fetch failed: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch flight offers".to_string(),
                )
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch flight offers".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
