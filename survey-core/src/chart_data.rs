use serde::{Deserialize, Serialize};

pub const IDE_PALETTE: [&str; 4] = ["#2563EB", "#3B82F6", "#60A5FA", "#93C5FD"];
pub const SATISFACTION_PALETTE: [&str; 5] = ["#EF4444", "#F97316", "#EAB308", "#22C55E", "#10B981"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
    #[serde(
        rename = "backgroundColor",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub background_color: Vec<String>,
}

impl ChartDataset {
    pub fn from_pairs(pairs: Vec<(String, u64)>) -> Self {
        let (labels, data) = pairs.into_iter().unzip();
        Self {
            labels,
            data,
            background_color: Vec::new(),
        }
    }

    pub fn with_palette(mut self, palette: &[&str]) -> Self {
        self.background_color = palette.iter().map(|c| c.to_string()).collect();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDataset {
    pub likes: ChartDataset,
    pub dislikes: ChartDataset,
}

/// Body of `GET /api/chart-data`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataBundle {
    pub ide_chart: ChartDataset,
    pub satisfaction_chart: ChartDataset,
    pub feedback_chart: FeedbackDataset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_chart_js_field_names() {
        let ds = ChartDataset::from_pairs(vec![("VS Code".into(), 3)]).with_palette(&IDE_PALETTE);
        let v = serde_json::to_value(&ds).expect("json");
        assert_eq!(v["labels"], serde_json::json!(["VS Code"]));
        assert_eq!(v["data"], serde_json::json!([3]));
        assert_eq!(v["backgroundColor"][0], "#2563EB");
    }

    #[test]
    fn feedback_halves_omit_colors() {
        let ds = ChartDataset::from_pairs(vec![("Prazos".into(), 2)]);
        let v = serde_json::to_value(&ds).expect("json");
        assert!(v.get("backgroundColor").is_none());
    }
}
