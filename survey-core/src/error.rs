use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("survey file: {0}")]
    Io(#[from] std::io::Error),
    #[error("survey csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("request log: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, SurveyError>;
