//! HTTP data source with endpoint fallback
//!
//! Each endpoint is tried in order; transient failures are retried against
//! the same endpoint before moving on. The payload is a [`TimelineData`]
//! JSON document.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};

use super::retry::{is_retryable, retry_async, RetryConfig};
use super::DataSource;
use crate::config::TimelineConfig;
use crate::records::TimelineData;
use crate::text::truncate_label;
use crate::{Error, Result};

const ERROR_BODY_CHARS: usize = 200;

/// Fetches timeline data from one of several HTTP endpoints.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    endpoints: Vec<String>,
    token: Option<String>,
    retry: RetryConfig,
}

impl HttpSource {
    /// Build a source from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] if no endpoint is configured and
    /// [`Error::Network`] if the HTTP client cannot be built.
    pub fn from_config(config: &TimelineConfig) -> Result<Self> {
        if config.endpoints.is_empty() {
            return Err(Error::MissingConfig("TIMELINE_ENDPOINTS".to_string()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoints: config.endpoints.clone(),
            token: config.token.clone(),
            retry: RetryConfig {
                max_retries: config.max_retries,
                ..RetryConfig::default()
            },
        })
    }

    /// Endpoints in the order they are tried.
    #[must_use]
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    async fn fetch_once(&self, endpoint: &str) -> Result<TimelineData> {
        let mut request = self.client.get(endpoint);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream {
                status: status.as_u16(),
                message: truncate_label(body.trim(), ERROR_BODY_CHARS),
            });
        }
        // A bad body is Error::Json, which is never retried.
        let body = response.text().await?;
        Ok(serde_json::from_str::<TimelineData>(&body)?)
    }
}

impl DataSource for HttpSource {
    fn fetch(&self) -> impl Future<Output = Result<TimelineData>> + Send {
        async move {
            let mut last_error = None;
            for endpoint in &self.endpoints {
                match retry_async(&self.retry, endpoint, is_retryable, || {
                    self.fetch_once(endpoint)
                })
                .await
                {
                    Ok(data) => {
                        info!(
                            endpoint = %endpoint,
                            experiments = data.experiments.len(),
                            releases = data.releases.len(),
                            "fetched timeline data"
                        );
                        return Ok(data);
                    }
                    Err(err) => {
                        warn!(endpoint = %endpoint, error = %err, "endpoint failed, trying next");
                        last_error = Some(err);
                    }
                }
            }
            Err(Error::EndpointsExhausted {
                attempted: self.endpoints.len(),
                last_error: last_error.map_or_else(|| "no endpoints".to_string(), |e| e.to_string()),
            })
        }
    }
}
