use crate::domain::ports::EventSink;
use crate::utils::error::{HelperError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// 把事件 POST 到 PostHog 的 `/capture/` 端點
#[derive(Debug, Clone)]
pub struct PostHogSink {
    client: Client,
    capture_url: String,
}

impl PostHogSink {
    pub fn new(client: Client, api_host: &str) -> Self {
        Self {
            client,
            capture_url: format!("{}/capture/", api_host.trim_end_matches('/')),
        }
    }

    pub fn capture_url(&self) -> &str {
        &self.capture_url
    }
}

#[async_trait]
impl EventSink for PostHogSink {
    async fn capture(&self, payload: serde_json::Value) -> Result<()> {
        tracing::debug!("Posting analytics event to: {}", self.capture_url);
        let response = self.client.post(&self.capture_url).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(HelperError::AnalyticsError {
                message: format!("PostHog API error: {}", response.status()),
            });
        }

        Ok(())
    }
}
