use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use survey_core::SurveyError;
use thiserror::Error;

/// Handler failures, rendered as `{ "error": ... }` with a 500 status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to load chart data")]
    ChartData,
    #[error("Failed to submit data request")]
    RequestLog(#[source] SurveyError),
    #[error("Failed to render dashboard")]
    Render(#[from] askama::Error),
    #[error("background task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::RequestLog(source) => tracing::error!(error = %source, "{}", self),
            ApiError::Task(source) => tracing::error!(error = %source, "{}", self),
            _ => tracing::error!("{}", self),
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("open request log: {0}")]
    RequestLog(#[from] SurveyError),
    #[error("bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("serve: {0}")]
    Serve(std::io::Error),
}
