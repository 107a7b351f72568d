//! Seams between the dashboard logic and the browser.
//!
//! The browser implementations live in `web`; tests drive the same logic
//! through in-memory fakes.

use crate::chart_config::{ChartConfig, ChartData};
use crate::dto::ChartDataBundle;
use crate::error::DashboardError;
use std::time::Duration;

pub trait ChartHandle {
    fn set_data(&mut self, data: &ChartData);
    /// Animated re-render after a data change.
    fn update(&mut self);
    fn resize(&self);
}

pub trait ChartBackend {
    type Chart: ChartHandle;

    /// Renders `config` into the element `mount_id`. `None` when the page
    /// has no such mount point.
    fn create(&self, mount_id: &str, config: &ChartConfig) -> Option<Self::Chart>;
}

pub trait Page {
    /// Prepends an error banner to the page container.
    fn show_error(&self, message: &str);
}

#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn fetch_chart_data(&self) -> Result<ChartDataBundle, DashboardError>;
    async fn request_data(&self) -> Result<(), DashboardError>;
}

#[allow(async_fn_in_trait)]
pub trait Sleep {
    async fn sleep(&self, duration: Duration);
}

pub trait ButtonControl {
    fn label(&self) -> String;
    fn set_label(&self, html: &str);
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
    fn set_background(&self, color: Option<&str>);
}
