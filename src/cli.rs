use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::Settings;
use crate::render::ColorMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Check a product's reviews with the fake review analysis service
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file holding an array of {"Review_Text", "Rating"} objects
    pub file: Option<PathBuf>,

    /// Settings file (defaults to config/default.yaml when present)
    #[arg(long, env = "REVIEW_GUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Analysis endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds, 0 to wait forever
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// When to color the output
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Output format for the analysis result
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    /// Flags win over every other settings source.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(endpoint) = &self.endpoint {
            settings.analysis.endpoint = endpoint.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            settings.analysis.timeout_secs = timeout_secs;
        }
        if let Some(color) = self.color {
            settings.display.color = color;
        }
    }
}
