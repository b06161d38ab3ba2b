use crate::error::CliError;
use async_trait::async_trait;
use shared_types::{ErrorResponse, GenerateProjectRequest, GeneratedProject, HealthResponse};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Where generated projects come from
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn generate(&self, request: &GenerateProjectRequest) -> Result<GeneratedProject, CliError>;
}

/// Talks to a running `capstone-api` server over HTTP
pub struct HttpProjectSource {
    http_client: reqwest::Client,
    server_url: String,
}

impl HttpProjectSource {
    pub fn new(server_url: Option<String>) -> Result<Self, CliError> {
        let server_url = server_url
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self {
            http_client,
            server_url,
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub async fn health(&self) -> Result<HealthResponse, CliError> {
        let url = format!("{}/api/health", self.server_url);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CliError::Communication(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(CliError::Communication(format!(
                "HTTP {} from health check",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CliError::Communication(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl ProjectSource for HttpProjectSource {
    async fn generate(&self, request: &GenerateProjectRequest) -> Result<GeneratedProject, CliError> {
        let url = format!("{}/api/generate", self.server_url);
        info!(
            keyword = request.keyword.as_deref().unwrap_or(""),
            category = request.category.as_deref().unwrap_or(""),
            "Requesting project"
        );
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| CliError::Communication(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(err) => {
                    if let Some(raw) = &err.ai_response {
                        warn!(ai_output = %raw, "Server could not parse model output");
                    }
                    err.error
                }
                Err(_) => body,
            };
            return Err(CliError::Communication(format!(
                "HTTP {} error: {}",
                status, message
            )));
        }

        response
            .json::<GeneratedProject>()
            .await
            .map_err(|e| CliError::Communication(format!("Failed to parse response: {}", e)))
    }
}
