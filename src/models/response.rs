use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_reviews: u64,
    pub fake_reviews: u64,
    pub fake_percentage: f64,
    pub product_status: String,
}

impl AnalysisResult {
    /// True when the counts and percentage are mutually consistent.
    /// The service is trusted either way; this only feeds diagnostics.
    pub fn is_within_bounds(&self) -> bool {
        self.fake_reviews <= self.total_reviews
            && (0.0..=100.0).contains(&self.fake_percentage)
    }
}

/// Body the analysis service sends alongside a 400.
#[derive(Debug, Deserialize)]
pub struct ServiceErrorBody {
    pub error: String,
}
