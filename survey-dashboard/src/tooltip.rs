use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn key(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

/// What the charting library hands a tooltip label callback, reduced to
/// the parts the label text needs.
#[derive(Clone, Debug)]
pub struct TooltipContext<'a> {
    pub label: &'a str,
    pub value: f64,
    pub dataset: &'a [f64],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TooltipFormat {
    /// `"{count} developers"`
    #[default]
    Developers,
    /// `"{label}: {count} ({percent}%)"`
    ShareOfTotal,
    /// `"Likes: {count} mentions"` / `"Dislikes: {count} mentions"`
    Mentions,
}

impl TooltipFormat {
    /// Axis the parsed value is read from; `None` for charts without axes.
    pub fn value_axis(self) -> Option<Axis> {
        match self {
            TooltipFormat::Developers => Some(Axis::Y),
            TooltipFormat::ShareOfTotal => None,
            TooltipFormat::Mentions => Some(Axis::X),
        }
    }

    pub fn render(self, ctx: &TooltipContext<'_>) -> String {
        match self {
            TooltipFormat::Developers => format!("{} developers", ctx.value),
            TooltipFormat::ShareOfTotal => {
                let total: f64 = ctx.dataset.iter().sum();
                let percent = if total == 0.0 {
                    0.0
                } else {
                    ctx.value / total * 100.0
                };
                format!("{}: {} ({percent:.1}%)", ctx.label, ctx.value)
            }
            TooltipFormat::Mentions => {
                let kind = if ctx.value > 0.0 { "Likes" } else { "Dislikes" };
                format!("{kind}: {} mentions", ctx.value.abs())
            }
        }
    }
}

/// Tick label for the signed feedback axis.
pub fn abs_tick(value: f64) -> f64 {
    value.abs()
}
