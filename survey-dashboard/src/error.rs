use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum DashboardError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}
