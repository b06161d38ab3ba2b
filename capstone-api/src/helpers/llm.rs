use crate::config::{LlmConfig, API_KEY_ENV};
use async_trait::async_trait;
use capstone_llm_sdk::client::LlmClient;
use capstone_llm_sdk::error::LlmError;
use capstone_llm_sdk::openai::OpenAIClient;
use capstone_llm_sdk::providers::OPENAI;
use capstone_llm_sdk::types::{CompletionRequest, CompletionResponse};
use std::sync::Arc;
use tracing::warn;

/// Build the completion client from configuration.
///
/// A missing API key does not fail startup: the returned client rejects
/// every call with an authentication error instead.
pub fn create_llm_client(config: &LlmConfig) -> anyhow::Result<Arc<dyn LlmClient>> {
    let api_key = match config.api_key.as_deref().filter(|key| !key.is_empty()) {
        Some(key) => key,
        None => {
            warn!(
                env = API_KEY_ENV,
                "No API key configured; generation requests will fail until one is set"
            );
            return Ok(Arc::new(UnconfiguredClient::new(&config.model)));
        }
    };

    let mut client = OpenAIClient::new(api_key)?.with_model(&config.model);
    if let Some(base_url) = &config.base_url {
        client = client.with_base_url(base_url);
    }

    Ok(Arc::new(client))
}

/// Stand-in client used when no credential is available
pub struct UnconfiguredClient {
    model: String,
}

impl UnconfiguredClient {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

#[async_trait]
impl LlmClient for UnconfiguredClient {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        Err(LlmError::authentication(format!(
            "{} is not set",
            API_KEY_ENV
        )))
    }

    fn provider_name(&self) -> &str {
        OPENAI
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
