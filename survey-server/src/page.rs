use askama::Template;
use survey_core::SurveyInsights;

pub const PAGE_ERROR_MESSAGE: &str = "Failed to load survey data. Please try again later.";

#[derive(Template)]
#[template(path = "index.html")]
pub struct DashboardPage {
    pub insights: Option<SurveyInsights>,
    pub error: Option<String>,
}

impl DashboardPage {
    pub fn with_insights(insights: SurveyInsights) -> Self {
        Self {
            insights: Some(insights),
            error: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            insights: None,
            error: Some(PAGE_ERROR_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_core::{DeveloperQuote, TopItem};

    fn insights() -> SurveyInsights {
        SurveyInsights {
            total_responses: 12,
            survey_period: "March-April 2025".into(),
            avg_satisfaction: 4.2,
            top_ide: TopItem::new("Visual Studio Code", 9),
            top_like: TopItem::new("Clear flows", 5),
            top_dislike: TopItem::new("Edge cases", 4),
            quotes: vec![DeveloperQuote {
                name: "Ana".into(),
                text: "Handoffs got <much> better".into(),
                avatar: "https://ui-avatars.com/api/?name=Ana&background=2563EB&color=fff".into(),
            }],
            report_date: "30 April 2025".into(),
        }
    }

    #[test]
    fn renders_mount_points_and_insights() {
        let html = DashboardPage::with_insights(insights()).render().expect("render");
        for id in ["ideChart", "satisfactionChart", "feedbackChart", "requestDataBtn"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing {id}");
        }
        assert!(html.contains("Visual Studio Code"));
        assert!(html.contains("4.2"));
        assert!(html.contains("quote-card"));
    }

    #[test]
    fn escapes_quote_text() {
        let html = DashboardPage::with_insights(insights()).render().expect("render");
        assert!(html.contains("&lt;much&gt;"));
    }

    #[test]
    fn unavailable_page_shows_error_without_charts() {
        let html = DashboardPage::unavailable().render().expect("render");
        assert!(html.contains(PAGE_ERROR_MESSAGE));
        assert!(!html.contains("id=\"ideChart\""));
    }

    #[test]
    fn sections_stay_visible_until_reveal_controller_runs() {
        let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../static/css/dashboard.css");
        let css = std::fs::read_to_string(css_path).expect("stylesheet");
        for rule in css.lines().filter(|l| l.contains("opacity: 0;")) {
            let selectors = rule.split('{').next().unwrap_or_default();
            for selector in selectors.split(',') {
                assert!(
                    selector.trim().starts_with(".reveal-ready "),
                    "hidden without the controller: {selector}"
                );
            }
        }

        let html = DashboardPage::with_insights(insights()).render().expect("render");
        assert!(!html.contains("reveal-ready"));
    }
}
