use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub csv_path: PathBuf,
    pub static_dir: PathBuf,
    pub requests_db: PathBuf,
    pub survey_period: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            csv_path: PathBuf::from("data/survey.csv"),
            static_dir: PathBuf::from("static"),
            requests_db: PathBuf::from("data/requests.db"),
            survey_period: "March-April 2025".into(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup("SURVEY_BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid SURVEY_BIND_ADDR, using {DEFAULT_BIND_ADDR}");
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        Self {
            bind_addr,
            csv_path: lookup("SURVEY_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.csv_path),
            static_dir: lookup("SURVEY_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            requests_db: lookup("SURVEY_REQUESTS_DB")
                .map(PathBuf::from)
                .unwrap_or(defaults.requests_db),
            survey_period: lookup("SURVEY_PERIOD_LABEL").unwrap_or(defaults.survey_period),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn reads_overrides_and_keeps_defaults() {
        let env: HashMap<&str, &str> = [
            ("SURVEY_BIND_ADDR", "127.0.0.1:8080"),
            ("SURVEY_CSV_PATH", "/srv/survey.csv"),
        ]
        .into_iter()
        .collect();

        let config = ServerConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().expect("addr"));
        assert_eq!(config.csv_path, PathBuf::from("/srv/survey.csv"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.survey_period, "March-April 2025");
    }

    #[test]
    fn invalid_bind_addr_falls_back() {
        let config = ServerConfig::from_lookup(|k| {
            (k == "SURVEY_BIND_ADDR").then(|| "not-an-addr".to_string())
        });
        assert_eq!(config.bind_addr.port(), 5000);
    }
}
