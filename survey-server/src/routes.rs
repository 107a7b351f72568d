use crate::error::ApiError;
use crate::page::DashboardPage;
use askama::Template;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use survey_core::{ChartDataBundle, DataRequest, RequestLog, SurveyDataProcessor};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const REQUEST_ACCEPTED_MESSAGE: &str =
    "Your request has been submitted. You will receive the complete data within 24 hours.";

#[derive(Clone)]
pub struct AppState {
    pub survey: Arc<SurveyDataProcessor>,
    pub requests: RequestLog,
    pub survey_period: Arc<str>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RequestAccepted {
    pub message: String,
    pub request_id: i64,
}

pub fn dashboard_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/chart-data", get(chart_data))
        .route("/api/request-data", post(request_data))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let survey = state.survey.clone();
    let period = state.survey_period.clone();
    let today = chrono::Local::now().date_naive();

    let page = match tokio::task::spawn_blocking(move || survey.survey_insights(&period, today)).await {
        Ok(insights) => DashboardPage::with_insights(insights),
        Err(err) => {
            tracing::error!(error = %err, "failed to compute survey insights");
            DashboardPage::unavailable()
        }
    };

    Ok(Html(page.render()?))
}

async fn chart_data(State(state): State<AppState>) -> Result<Json<ChartDataBundle>, ApiError> {
    let survey = state.survey.clone();
    tokio::task::spawn_blocking(move || survey.chart_data())
        .await
        .map(Json)
        .map_err(|err| {
            tracing::error!(error = %err, "chart data task failed");
            ApiError::ChartData
        })
}

async fn request_data(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RequestAccepted>, ApiError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let log = state.requests.clone();
    let request_id = tokio::task::spawn_blocking(move || log.append(&DataRequest::received_now(user_agent)))
        .await?
        .map_err(ApiError::RequestLog)?;

    tracing::info!(request_id, "full data request received");
    Ok(Json(RequestAccepted {
        message: REQUEST_ACCEPTED_MESSAGE.to_string(),
        request_id,
    }))
}
