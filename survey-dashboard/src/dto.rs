use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    #[serde(rename = "backgroundColor", default)]
    pub background_color: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDataset {
    pub likes: ChartDataset,
    pub dislikes: ChartDataset,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataBundle {
    pub ide_chart: ChartDataset,
    pub satisfaction_chart: ChartDataset,
    pub feedback_chart: FeedbackDataset,
}

/// Replacement data for some of the charts; absent charts are left alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataUpdate {
    #[serde(default)]
    pub ide_chart: Option<ChartDataset>,
    #[serde(default)]
    pub satisfaction_chart: Option<ChartDataset>,
    #[serde(default)]
    pub feedback_chart: Option<FeedbackDataset>,
}
