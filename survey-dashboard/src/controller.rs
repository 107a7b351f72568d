use crate::chart_config::{self, ChartConfig};
use crate::dto::{ChartDataBundle, ChartDataUpdate, ChartDataset, FeedbackDataset};
use crate::error::DashboardError;
use crate::host::{ChartBackend, ChartHandle, DashboardApi, Page};
use std::collections::BTreeMap;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load chart data. Please refresh the page.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartKey {
    Ide,
    Satisfaction,
    Feedback,
}

impl ChartKey {
    pub const ALL: [ChartKey; 3] = [ChartKey::Ide, ChartKey::Satisfaction, ChartKey::Feedback];

    pub fn mount_id(self) -> &'static str {
        match self {
            ChartKey::Ide => "ideChart",
            ChartKey::Satisfaction => "satisfactionChart",
            ChartKey::Feedback => "feedbackChart",
        }
    }
}

/// Owns the live charts of the page, keyed by their mount point.
pub struct Dashboard<B: ChartBackend> {
    backend: B,
    charts: BTreeMap<ChartKey, B::Chart>,
}

impl<B: ChartBackend> Dashboard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            charts: BTreeMap::new(),
        }
    }

    /// Fetches the chart data once and mounts every chart. On failure the
    /// page gets a single error banner and no chart is created.
    pub async fn load<A, P>(backend: B, api: &A, page: &P) -> Result<Self, DashboardError>
    where
        A: DashboardApi,
        P: Page,
    {
        let data = match api.fetch_chart_data().await {
            Ok(data) => data,
            Err(err) => {
                page.show_error(LOAD_ERROR_MESSAGE);
                return Err(err);
            }
        };

        let mut dashboard = Self::new(backend);
        dashboard.mount_all(&data);
        Ok(dashboard)
    }

    pub fn mount_all(&mut self, data: &ChartDataBundle) {
        self.init_ide_chart(&data.ide_chart);
        self.init_satisfaction_chart(&data.satisfaction_chart);
        self.init_feedback_chart(&data.feedback_chart);
    }

    pub fn init_ide_chart(&mut self, data: &ChartDataset) -> bool {
        self.mount(ChartKey::Ide, chart_config::ide_chart(data))
    }

    pub fn init_satisfaction_chart(&mut self, data: &ChartDataset) -> bool {
        self.mount(ChartKey::Satisfaction, chart_config::satisfaction_chart(data))
    }

    pub fn init_feedback_chart(&mut self, data: &FeedbackDataset) -> bool {
        self.mount(ChartKey::Feedback, chart_config::feedback_chart(data))
    }

    fn mount(&mut self, key: ChartKey, config: ChartConfig) -> bool {
        match self.backend.create(key.mount_id(), &config) {
            Some(chart) => {
                self.charts.insert(key, chart);
                true
            }
            None => false,
        }
    }

    pub fn update_charts(&mut self, update: &ChartDataUpdate) {
        let replacements = [
            (ChartKey::Ide, update.ide_chart.as_ref().map(chart_config::ide_data)),
            (
                ChartKey::Satisfaction,
                update
                    .satisfaction_chart
                    .as_ref()
                    .map(chart_config::satisfaction_data),
            ),
            (
                ChartKey::Feedback,
                update.feedback_chart.as_ref().map(chart_config::feedback_data),
            ),
        ];

        for (key, data) in replacements {
            let (Some(chart), Some(data)) = (self.charts.get_mut(&key), data) else {
                continue;
            };
            chart.set_data(&data);
            chart.update();
        }
    }

    pub fn handle_resize(&self) {
        for chart in self.charts.values() {
            chart.resize();
        }
    }

    pub fn chart(&self, key: ChartKey) -> Option<&B::Chart> {
        self.charts.get(&key)
    }

    pub fn charts(&self) -> impl Iterator<Item = (ChartKey, &B::Chart)> {
        self.charts.iter().map(|(k, c)| (*k, c))
    }
}
