use serde::{Deserialize, Serialize};

const QUOTE_MIN_CHARS: usize = 20;
const QUOTE_MAX_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopItem {
    pub label: String,
    pub count: u64,
}

impl TopItem {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeveloperQuote {
    pub name: String,
    pub text: String,
    pub avatar: String,
}

impl DeveloperQuote {
    /// Picks the longer of feedback and suggestions (feedback only when
    /// strictly longer). Returns `None` without a name or when the chosen
    /// text is too short to be worth quoting.
    pub fn from_answers(name: &str, feedback: &str, suggestions: &str) -> Option<Self> {
        let name = name.trim();
        let feedback = feedback.trim();
        let suggestions = suggestions.trim();
        if name.is_empty() || (feedback.is_empty() && suggestions.is_empty()) {
            return None;
        }

        let text = if feedback.chars().count() > suggestions.chars().count() {
            feedback
        } else {
            suggestions
        };
        if text.chars().count() <= QUOTE_MIN_CHARS {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            text: truncate_quote(text),
            avatar: avatar_url(name),
        })
    }
}

fn truncate_quote(text: &str) -> String {
    if text.chars().count() > QUOTE_MAX_CHARS {
        let cut: String = text.chars().take(QUOTE_MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=2563EB&color=fff",
        name.replace(' ', "+")
    )
}

/// Headline numbers rendered on the dashboard page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyInsights {
    pub total_responses: usize,
    pub survey_period: String,
    pub avg_satisfaction: f64,
    pub top_ide: TopItem,
    pub top_like: TopItem,
    pub top_dislike: TopItem,
    pub quotes: Vec<DeveloperQuote>,
    pub report_date: String,
}
