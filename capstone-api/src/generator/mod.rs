pub mod prompt;
pub mod response;

pub use prompt::build_prompt;
pub use response::{parse_project, strip_code_fences};

use crate::config::LlmConfig;
use crate::error::{ApiError, ApiResult};
use capstone_llm_sdk::client::LlmClient;
use capstone_llm_sdk::types::{CompletionRequest, ResponseFormat};
use serde_json::Value;
use shared_types::GenerateProjectRequest;
use std::sync::Arc;
use tracing::{error, info};

/// Fixed parameters of every completion call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub json_mode: bool,
}

impl From<&LlmConfig> for GenerationSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            json_mode: config.json_mode,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::from(&LlmConfig::default())
    }
}

/// Turns a keyword into a project description with one completion call.
pub struct ProjectGenerator {
    client: Arc<dyn LlmClient>,
    settings: GenerationSettings,
}

impl ProjectGenerator {
    pub fn new(client: Arc<dyn LlmClient>, settings: GenerationSettings) -> Self {
        Self { client, settings }
    }

    /// Validate, prompt, clean and parse.
    ///
    /// An absent or empty keyword fails before the completion service is
    /// contacted. The parsed JSON is returned untouched.
    pub async fn generate(&self, request: &GenerateProjectRequest) -> ApiResult<Value> {
        let keyword = match request.keyword.as_deref() {
            Some(keyword) if !keyword.is_empty() => keyword,
            _ => return Err(ApiError::KeywordRequired),
        };
        let category = request.category.as_deref();

        info!(
            keyword = %keyword,
            category = category.unwrap_or(""),
            provider = self.client.provider_name(),
            model = %self.settings.model,
            "Generating capstone project"
        );

        let mut completion = CompletionRequest::user_prompt(
            self.settings.model.clone(),
            build_prompt(keyword, category),
            self.settings.max_tokens,
        );
        completion.temperature = Some(self.settings.temperature);
        if self.settings.json_mode {
            completion.response_format = Some(ResponseFormat::JsonObject);
        }

        let response = self.client.complete(completion).await.map_err(|e| {
            error!(error = %e, status = ?e.status(), "Completion request failed");
            ApiError::from(e)
        })?;

        let cleaned = strip_code_fences(&response.joined_text());
        parse_project(&cleaned).map_err(|e| {
            error!(ai_output = %cleaned, "Model output is not valid JSON");
            e
        })
    }
}
