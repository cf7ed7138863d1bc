use async_trait::async_trait;
use http::header::{ACCEPT, CONTENT_TYPE};
use rquest::Client;
use tracing::{debug, error, warn};

use crate::clients::AnalysisClient;
use crate::config::AnalysisConfig;
use crate::error::{NetworkError, Result};
use crate::models::{AnalysisResult, AnalyzeRequest, ReviewRecord, ServiceErrorBody};

/// Single-shot JSON client for the `/analyze` endpoint. No retries.
pub struct HttpAnalysisClient {
    client: Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    pub fn new(settings: &AnalysisConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = settings.connect_timeout() {
            builder = builder.connect_timeout(connect_timeout);
        }

        debug!(
            endpoint = %settings.endpoint,
            timeout = ?settings.timeout(),
            connect_timeout = ?settings.connect_timeout(),
            "Creating analysis client"
        );

        Ok(Self {
            client: builder.build()?,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, reviews: &[ReviewRecord]) -> std::result::Result<AnalysisResult, NetworkError> {
        let body = serde_json::to_vec(&AnalyzeRequest { reviews }).map_err(NetworkError::Encode)?;

        debug!(
            url = %self.endpoint,
            review_count = reviews.len(),
            body_bytes = body.len(),
            "Sending analysis request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(NetworkError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(NetworkError::Transport)?;

        debug!(
            status = status.as_u16(),
            url = %self.endpoint,
            body_bytes = body.len(),
            "Response received"
        );

        if !status.is_success() {
            let message = serde_json::from_slice::<ServiceErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            error!(
                status = status.as_u16(),
                service_error = ?message,
                "Analysis service rejected the request"
            );
            return Err(NetworkError::Status { status, message });
        }

        let result: AnalysisResult = serde_json::from_slice(&body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&body);
            error!(
                error = %e,
                body = %body_str,
                "Failed to parse analysis response"
            );
            NetworkError::InvalidResponse(e)
        })?;

        if !result.is_within_bounds() {
            warn!(
                total_reviews = result.total_reviews,
                fake_reviews = result.fake_reviews,
                fake_percentage = result.fake_percentage,
                "Analysis result is out of the expected bounds"
            );
        }

        Ok(result)
    }
}
