//! Survey aggregation for the results dashboard: CSV loading, per-question
//! tallies, chart payloads and the log of full-data requests.

pub mod chart_data;
pub mod error;
pub mod insights;
pub mod processor;
pub mod request_log;
pub mod responses;
pub mod tally;

pub use chart_data::{ChartDataBundle, ChartDataset, FeedbackDataset};
pub use error::{Result, SurveyError};
pub use insights::{DeveloperQuote, SurveyInsights, TopItem};
pub use processor::SurveyDataProcessor;
pub use request_log::{DataRequest, RequestLog};
pub use responses::SurveyResponse;
