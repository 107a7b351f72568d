use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One row of the survey export. Column names are the question texts of the
/// original form, so they stay verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    #[serde(rename = "Nome", default)]
    pub name: String,
    #[serde(rename = "Com quais IDEs você trabalha na frete?", default)]
    pub ide: String,
    #[serde(rename = "O Dev Mode do Figma facilita o entendimento dos fluxos?", default)]
    pub dev_mode_rating: String,
    #[serde(rename = "Do que você MAIS GOSTA nos Handoffs?", default)]
    pub likes: String,
    #[serde(rename = "Do que você MENOS GOSTA nos Handoffs?", default)]
    pub dislikes: String,
    #[serde(rename = "Fala que eu te escuto", default)]
    pub feedback: String,
    #[serde(rename = "Você tem alguma sugestões de melhorias para o handoff?", default)]
    pub suggestions: String,
}

pub fn read_responses<R: std::io::Read>(reader: R) -> Result<Vec<SurveyResponse>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut out = Vec::new();
    for row in reader.deserialize() {
        out.push(row?);
    }
    Ok(out)
}

/// Loads the export at `path`. A missing or unreadable file is logged and
/// treated as a survey with no responses.
pub fn load_responses(path: &Path) -> Vec<SurveyResponse> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "survey csv not found");
        return Vec::new();
    }

    let loaded = std::fs::File::open(path)
        .map_err(Into::into)
        .and_then(read_responses);

    match loaded {
        Ok(responses) => {
            tracing::info!(count = responses.len(), "loaded survey responses");
            responses
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load survey csv");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Nome,Com quais IDEs você trabalha na frete?,O Dev Mode do Figma facilita o entendimento dos fluxos?,Do que você MAIS GOSTA nos Handoffs?,Do que você MENOS GOSTA nos Handoffs?,Fala que eu te escuto,Você tem alguma sugestões de melhorias para o handoff?";

    #[test]
    fn reads_known_columns() {
        let csv = format!("{HEADER}\nAna,VS Code,4,\"Clareza, Prazos\",Edge cases,,\n");
        let rows = read_responses(csv.as_bytes()).expect("read");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ana");
        assert_eq!(rows[0].ide, "VS Code");
        assert_eq!(rows[0].dev_mode_rating, "4");
        assert_eq!(rows[0].likes, "Clareza, Prazos");
        assert!(rows[0].feedback.is_empty());
    }

    #[test]
    fn missing_columns_read_as_empty() {
        let csv = "Carimbo de data/hora,Nome\n2025-03-01,Bia\n";
        let rows = read_responses(csv.as_bytes()).expect("read");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Bia");
        assert!(rows[0].ide.is_empty());
    }

    #[test]
    fn missing_file_yields_no_responses() {
        let rows = load_responses(Path::new("/tmp/survey-dashboard-tests/does-not-exist.csv"));
        assert!(rows.is_empty());
    }
}
