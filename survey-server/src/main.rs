use std::sync::Arc;
use survey_core::{RequestLog, SurveyDataProcessor};
use survey_server::config::ServerConfig;
use survey_server::error::StartupError;
use survey_server::routes::{self, AppState};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "survey_server=info,survey_core=info,tower_http=info";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(err) = run(ServerConfig::from_env()).await {
        tracing::error!("survey-server failed: {err}");
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let survey = SurveyDataProcessor::from_csv_path(&config.csv_path);
    let requests = RequestLog::open(&config.requests_db)?;
    tracing::info!(
        responses = survey.response_count(),
        logged_requests = requests.count().unwrap_or(0),
        "survey data ready"
    );

    let state = AppState {
        survey: Arc::new(survey),
        requests,
        survey_period: Arc::from(config.survey_period.as_str()),
    };
    let app = routes::dashboard_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.bind_addr,
            source,
        })?;

    tracing::info!(
        static_dir = %config.static_dir.display(),
        "survey-server listening on http://{}",
        config.bind_addr
    );
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
