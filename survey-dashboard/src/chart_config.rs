//! Typed Chart.js configuration for the three dashboard charts.
//!
//! Everything here serializes to the option object the charting library
//! expects. Function-valued options (tooltip labels, tick formatting) cannot
//! travel through JSON, so they are described by [`Callbacks`] and installed
//! by the browser layer after serialization.

use crate::dto::{ChartDataset, FeedbackDataset};
use crate::tooltip::{Axis, TooltipFormat};
use serde::Serialize;

pub const ANIMATION_DURATION_MS: u32 = 1500;
pub const LIKE_COLOR: &str = "#10B981";
pub const DISLIKE_COLOR: &str = "#EF4444";

const PRIMARY: &str = "#2563EB";
const TICK_COLOR: &str = "#6B7280";
const GRID_COLOR: &str = "rgba(229, 231, 235, 0.5)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Easing {
    #[serde(rename = "easeOutQuart")]
    EaseOutQuart,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
    #[serde(skip)]
    pub callbacks: Callbacks,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Callbacks {
    pub tooltip: TooltipFormat,
    /// Axis whose tick labels show absolute values.
    pub abs_ticks: Option<Axis>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    One(String),
    Each(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_color: Colors,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_skipped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_width: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<Axis>,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
    pub animation: Animation,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: TooltipStyle,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub use_point_style: bool,
    pub point_style: String,
    pub padding: u32,
    pub color: String,
    pub font: Font,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipStyle {
    pub background_color: String,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub corner_radius: u32,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background_color: "rgba(37, 99, 235, 0.9)".into(),
            title_color: "#ffffff".into(),
            body_color: "#ffffff".into(),
            border_color: PRIMARY.into(),
            border_width: 1,
            corner_radius: 8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scales {
    pub x: Scale,
    pub y: Scale,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub ticks: Ticks,
    pub grid: Grid,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Default for Ticks {
    fn default() -> Self {
        Self {
            color: TICK_COLOR.into(),
            step_size: None,
            max_rotation: None,
            font: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Grid {
    fn hidden() -> Self {
        Self {
            display: Some(false),
            color: None,
        }
    }

    fn faint() -> Self {
        Self {
            display: None,
            color: Some(GRID_COLOR.into()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub duration: u32,
    pub easing: Easing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate_rotate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate_scale: Option<bool>,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            duration: ANIMATION_DURATION_MS,
            easing: Easing::EaseOutQuart,
            animate_rotate: None,
            animate_scale: None,
        }
    }
}

fn base_options(plugins: Plugins) -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        index_axis: None,
        plugins,
        scales: None,
        cutout: None,
        animation: Animation::default(),
    }
}

fn hidden_legend() -> Legend {
    Legend {
        display: Some(false),
        ..Legend::default()
    }
}

pub fn ide_data(data: &ChartDataset) -> ChartData {
    ChartData {
        labels: data.labels.clone(),
        datasets: vec![Dataset {
            label: Some("Developers".into()),
            data: data.data.clone(),
            background_color: data.background_color.clone(),
            border_color: Colors::One(PRIMARY.into()),
            border_width: 2,
            border_radius: Some(8),
            border_skipped: Some(false),
            hover_border_width: None,
        }],
    }
}

pub fn ide_chart(data: &ChartDataset) -> ChartConfig {
    let mut options = base_options(Plugins {
        legend: hidden_legend(),
        tooltip: TooltipStyle::default(),
    });
    options.scales = Some(Scales {
        x: Scale {
            begin_at_zero: None,
            ticks: Ticks {
                max_rotation: Some(45),
                ..Ticks::default()
            },
            grid: Grid::hidden(),
        },
        y: Scale {
            begin_at_zero: Some(true),
            ticks: Ticks {
                step_size: Some(1),
                ..Ticks::default()
            },
            grid: Grid::faint(),
        },
    });

    ChartConfig {
        kind: ChartKind::Bar,
        data: ide_data(data),
        options,
        callbacks: Callbacks {
            tooltip: TooltipFormat::Developers,
            abs_ticks: None,
        },
    }
}

pub fn satisfaction_data(data: &ChartDataset) -> ChartData {
    ChartData {
        labels: data.labels.clone(),
        datasets: vec![Dataset {
            label: None,
            data: data.data.clone(),
            background_color: data.background_color.clone(),
            border_color: Colors::One("#ffffff".into()),
            border_width: 3,
            border_radius: None,
            border_skipped: None,
            hover_border_width: Some(4),
        }],
    }
}

pub fn satisfaction_chart(data: &ChartDataset) -> ChartConfig {
    let mut options = base_options(Plugins {
        legend: Legend {
            display: None,
            position: Some("bottom".into()),
            labels: Some(LegendLabels {
                use_point_style: true,
                point_style: "circle".into(),
                padding: 20,
                color: "#1F2937".into(),
                font: Font {
                    size: 12,
                    family: Some("Inter".into()),
                },
            }),
        },
        tooltip: TooltipStyle::default(),
    });
    options.cutout = Some("60%".into());
    options.animation.animate_rotate = Some(true);
    options.animation.animate_scale = Some(true);

    ChartConfig {
        kind: ChartKind::Doughnut,
        data: satisfaction_data(data),
        options,
        callbacks: Callbacks {
            tooltip: TooltipFormat::ShareOfTotal,
            abs_ticks: None,
        },
    }
}

/// Likes followed by negated dislikes, one color per entry.
#[derive(Clone, Debug, PartialEq)]
pub struct SignedSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub colors: Vec<String>,
}

pub fn combine_feedback(feedback: &FeedbackDataset) -> SignedSeries {
    let likes = &feedback.likes;
    let dislikes = &feedback.dislikes;

    let labels = likes.labels.iter().chain(&dislikes.labels).cloned().collect();
    let data = likes
        .data
        .iter()
        .copied()
        .chain(dislikes.data.iter().map(|v| -v))
        .collect();
    let colors = std::iter::repeat(LIKE_COLOR)
        .take(likes.data.len())
        .chain(std::iter::repeat(DISLIKE_COLOR).take(dislikes.data.len()))
        .map(String::from)
        .collect();

    SignedSeries {
        labels,
        data,
        colors,
    }
}

pub fn feedback_data(feedback: &FeedbackDataset) -> ChartData {
    let series = combine_feedback(feedback);
    ChartData {
        labels: series.labels,
        datasets: vec![Dataset {
            label: Some("Feedback".into()),
            data: series.data,
            background_color: series.colors.clone(),
            border_color: Colors::Each(series.colors),
            border_width: 1,
            border_radius: Some(6),
            border_skipped: None,
            hover_border_width: None,
        }],
    }
}

pub fn feedback_chart(feedback: &FeedbackDataset) -> ChartConfig {
    let mut options = base_options(Plugins {
        legend: hidden_legend(),
        tooltip: TooltipStyle::default(),
    });
    options.index_axis = Some(Axis::Y);
    options.scales = Some(Scales {
        x: Scale {
            begin_at_zero: Some(true),
            ticks: Ticks::default(),
            grid: Grid::faint(),
        },
        y: Scale {
            begin_at_zero: None,
            ticks: Ticks {
                font: Some(Font {
                    size: 11,
                    family: None,
                }),
                ..Ticks::default()
            },
            grid: Grid::hidden(),
        },
    });

    ChartConfig {
        kind: ChartKind::Bar,
        data: feedback_data(feedback),
        options,
        callbacks: Callbacks {
            tooltip: TooltipFormat::Mentions,
            abs_ticks: Some(Axis::X),
        },
    }
}
