use std::path::Path;
use std::time::Duration;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use tracing::debug;

use crate::render::ColorMode;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/analyze";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub analysis: AnalysisConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    pub endpoint: String,
    /// Whole-request timeout; 0 waits forever.
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    pub bar_width: usize,
    pub color: ColorMode,
}

impl AnalysisConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        (self.connect_timeout_secs > 0).then(|| Duration::from_secs(self.connect_timeout_secs))
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Layers built-in defaults, the config file and `REVIEW_GUARD_*` variables.
    /// An explicit `path` must exist; the implicit `config/default` may not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config/default").required(false),
        };

        let builder = Config::builder()
            .set_default("analysis.endpoint", DEFAULT_ENDPOINT)?
            .set_default("analysis.timeout_secs", 30_i64)?
            .set_default("analysis.connect_timeout_secs", 10_i64)?
            .set_default("display.bar_width", 40_i64)?
            .set_default("display.color", "auto")?
            .add_source(file)
            .add_source(
                Environment::with_prefix("REVIEW_GUARD")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        debug!(
            endpoint = %settings.analysis.endpoint,
            timeout_secs = settings.analysis.timeout_secs,
            color = ?settings.display.color,
            "Loaded settings"
        );

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("missing.yaml");
        assert!(Settings::load(Some(&absent)).is_err());

        let settings = Settings::new().unwrap();
        assert_eq!(settings.analysis.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(settings.display.bar_width, 40);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "analysis:\n  endpoint: http://10.0.0.7:8080/analyze\n  timeout_secs: 0\ndisplay:\n  color: never"
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.analysis.endpoint, "http://10.0.0.7:8080/analyze");
        assert_eq!(settings.analysis.timeout(), None);
        assert_eq!(settings.analysis.connect_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(settings.display.color, ColorMode::Never);
        assert_eq!(settings.display.bar_width, 40);
    }
}
