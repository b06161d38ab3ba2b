use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

use crate::{
    error::LlmError,
    openai::{
        types::{
            OpenAIChatCompletionRequest, OpenAIChatCompletionResponse, OpenAIErrorResponse,
            OpenAIMessage, OpenAIResponseFormat, OpenAIRole,
        },
    },
    types::{CompletionRequest, CompletionResponse, ContentBlock, ResponseFormat, Role, Usage},
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// OpenAI LLM client
pub struct OpenAIClient {
    api_key: String,
    base_url: String,
    model: String,
    http_client: reqwest::Client,
}

impl OpenAIClient {
    /// Create a new OpenAI client with the given API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::authentication("API key cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: crate::models::openai::GPT_4O_MINI_ID.to_string(),
            http_client,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model reported by [`crate::client::LlmClient::model_name`]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Create a chat completion using the OpenAI Chat Completions API
    pub async fn create_chat_completion(
        &self,
        request: OpenAIChatCompletionRequest,
    ) -> Result<OpenAIChatCompletionResponse, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| LlmError::authentication("Invalid API key format"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        tracing::debug!(model = %request.model, url = %url, "Sending chat completion request");

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let status = response.status();

        if status.is_success() {
            let openai_response: OpenAIChatCompletionResponse = response
                .json()
                .await
                .map_err(|e| LlmError::internal(format!("Failed to parse response: {}", e)))?;
            return Ok(openai_response);
        }

        // Extract retry-after header before consuming the response
        let retry_after = if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            response
                .headers()
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
        } else {
            None
        };

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(map_error_status(status, &error_text, retry_after))
    }
}

/// Map a non-2xx response to an [`LlmError`], preferring the message from an
/// OpenAI error envelope when the body carries one
fn map_error_status(
    status: reqwest::StatusCode,
    error_text: &str,
    retry_after: Option<u64>,
) -> LlmError {
    let message = serde_json::from_str::<OpenAIErrorResponse>(error_text)
        .map(|error_response| error_response.error.message)
        .unwrap_or_else(|_| error_text.to_string());

    match status {
        reqwest::StatusCode::BAD_REQUEST => LlmError::invalid_request(message),
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            LlmError::authentication(message)
        }
        reqwest::StatusCode::PAYLOAD_TOO_LARGE => LlmError::invalid_request("Request too large"),
        reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::rate_limit(message, retry_after),
        _ => LlmError::api_error(status.as_u16(), message),
    }
}

#[async_trait]
impl crate::client::LlmClient for OpenAIClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let mut openai_messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = request.system {
            openai_messages.push(OpenAIMessage::system(system));
        }
        for msg in request.messages {
            let role = match msg.role {
                Role::User => OpenAIRole::User,
                Role::Assistant => OpenAIRole::Assistant,
                Role::System => OpenAIRole::System,
            };
            openai_messages.push(OpenAIMessage::new(role, msg.joined_text()));
        }

        let openai_request = OpenAIChatCompletionRequest {
            model: request.model,
            messages: openai_messages,
            max_tokens: None, // Use max_completion_tokens instead
            max_completion_tokens: Some(request.max_tokens),
            temperature: request.temperature,
            top_p: request.top_p,
            stop: request.stop_sequences,
            response_format: request.response_format.map(|format| match format {
                ResponseFormat::Text => OpenAIResponseFormat::text(),
                ResponseFormat::JsonObject => OpenAIResponseFormat::json_object(),
            }),
        };

        let openai_response = self.create_chat_completion(openai_request).await?;

        let choice = openai_response
            .choices
            .first()
            .ok_or_else(|| LlmError::internal("No completion choices returned"))?;
        let text = choice
            .message
            .content
            .clone()
            .ok_or_else(|| LlmError::internal("No completion content returned"))?;

        let usage = openai_response.usage.clone().unwrap_or_default();

        Ok(CompletionResponse {
            content: vec![ContentBlock::Text { text }],
            role: match choice.message.role {
                OpenAIRole::User => Role::User,
                OpenAIRole::System => Role::System,
                OpenAIRole::Assistant | OpenAIRole::Tool => Role::Assistant,
            },
            usage: Usage {
                input_tokens: usage.prompt_tokens,
                output_tokens: usage.completion_tokens,
            },
            stop_reason: choice.finish_reason.clone(),
        })
    }

    fn provider_name(&self) -> &str {
        crate::providers::OPENAI
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
