pub mod http;

use async_trait::async_trait;

use crate::error::NetworkError;
use crate::models::{AnalysisResult, ReviewRecord};

pub use self::http::HttpAnalysisClient;

/// Anything that can turn a validated batch into an analysis verdict.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, reviews: &[ReviewRecord]) -> Result<AnalysisResult, NetworkError>;
}
