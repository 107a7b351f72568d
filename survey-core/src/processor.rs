use crate::chart_data::{ChartDataBundle, ChartDataset, FeedbackDataset, IDE_PALETTE, SATISFACTION_PALETTE};
use crate::insights::{DeveloperQuote, SurveyInsights, TopItem};
use crate::responses::{self, SurveyResponse};
use crate::tally::Tally;
use chrono::NaiveDate;
use std::path::Path;

const FEEDBACK_THEME_LIMIT: usize = 5;
const QUOTE_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct SatisfactionSummary {
    pub ratings: Tally,
    pub average: f64,
    pub total_responses: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackThemes {
    pub likes: Vec<(String, u64)>,
    pub dislikes: Vec<(String, u64)>,
}

#[derive(Clone, Debug, Default)]
pub struct SurveyDataProcessor {
    responses: Vec<SurveyResponse>,
}

impl SurveyDataProcessor {
    pub fn new(responses: Vec<SurveyResponse>) -> Self {
        Self { responses }
    }

    pub fn from_csv_path(path: &Path) -> Self {
        Self::new(responses::load_responses(path))
    }

    pub fn response_count(&self) -> usize {
        self.responses.len()
    }

    pub fn ide_preferences(&self) -> Tally {
        self.responses
            .iter()
            .map(|r| r.ide.trim())
            .filter(|ide| !ide.is_empty())
            .collect()
    }

    pub fn satisfaction_ratings(&self) -> SatisfactionSummary {
        let ratings: Vec<u64> = self
            .responses
            .iter()
            .filter_map(|r| parse_rating(&r.dev_mode_rating))
            .collect();

        let average = if ratings.is_empty() {
            0.0
        } else {
            ratings.iter().sum::<u64>() as f64 / ratings.len() as f64
        };

        SatisfactionSummary {
            ratings: ratings.iter().map(u64::to_string).collect(),
            average,
            total_responses: ratings.len(),
        }
    }

    pub fn feedback_themes(&self) -> FeedbackThemes {
        let likes: Tally = self
            .responses
            .iter()
            .flat_map(|r| split_themes(&r.likes))
            .collect();
        let dislikes: Tally = self
            .responses
            .iter()
            .flat_map(|r| split_themes(&r.dislikes))
            .collect();

        FeedbackThemes {
            likes: likes.most_common(FEEDBACK_THEME_LIMIT),
            dislikes: dislikes.most_common(FEEDBACK_THEME_LIMIT),
        }
    }

    pub fn developer_quotes(&self) -> Vec<DeveloperQuote> {
        self.responses
            .iter()
            .filter_map(|r| DeveloperQuote::from_answers(&r.name, &r.feedback, &r.suggestions))
            .take(QUOTE_LIMIT)
            .collect()
    }

    pub fn survey_insights(&self, survey_period: &str, report_date: NaiveDate) -> SurveyInsights {
        let ides = self.ide_preferences();
        let satisfaction = self.satisfaction_ratings();
        let themes = self.feedback_themes();

        let top_ide = ides
            .top()
            .map(|(label, count)| TopItem::new(label, count))
            .unwrap_or_else(|| TopItem::new("Visual Studio Code", 0));

        SurveyInsights {
            total_responses: self.responses.len(),
            survey_period: survey_period.to_string(),
            avg_satisfaction: round_tenths(satisfaction.average),
            top_ide,
            top_like: first_maximum(&themes.likes).unwrap_or_else(|| TopItem::new("Clear flows", 0)),
            top_dislike: first_maximum(&themes.dislikes)
                .unwrap_or_else(|| TopItem::new("Edge cases", 0)),
            quotes: self.developer_quotes(),
            report_date: report_date.format("%d %B %Y").to_string(),
        }
    }

    pub fn chart_data(&self) -> ChartDataBundle {
        let ides = self.ide_preferences();
        let satisfaction = self.satisfaction_ratings();
        let themes = self.feedback_themes();

        let satisfaction_chart = ChartDataset {
            labels: satisfaction
                .ratings
                .iter()
                .map(|(rating, _)| format!("Rating {rating}"))
                .collect(),
            data: satisfaction.ratings.values(),
            background_color: Vec::new(),
        };

        ChartDataBundle {
            ide_chart: ChartDataset {
                labels: ides.labels(),
                data: ides.values(),
                background_color: Vec::new(),
            }
            .with_palette(&IDE_PALETTE),
            satisfaction_chart: satisfaction_chart.with_palette(&SATISFACTION_PALETTE),
            feedback_chart: FeedbackDataset {
                likes: ChartDataset::from_pairs(themes.likes),
                dislikes: ChartDataset::from_pairs(themes.dislikes),
            },
        }
    }
}

/// One decimal place, exact ties going to the even digit (4.25 -> 4.2).
fn round_tenths(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

fn parse_rating(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn split_themes(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn first_maximum(entries: &[(String, u64)]) -> Option<TopItem> {
    entries
        .iter()
        .fold(None::<&(String, u64)>, |best, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(entry),
        })
        .map(|(label, count)| TopItem::new(label.clone(), *count))
}
