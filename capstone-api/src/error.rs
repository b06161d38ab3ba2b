use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use capstone_llm_sdk::error::LlmError;
use shared_types::ErrorResponse;
use thiserror::Error;

pub const KEYWORD_REQUIRED: &str = "Keyword required";
pub const PARSE_FAILURE: &str =
    "Failed to parse AI response as JSON. Check server logs for AI output.";
pub const GENERATION_FAILURE: &str = "Failed to generate project";

/// Terminal failure states of a generation request
#[derive(Error, Debug)]
pub enum ApiError {
    /// Keyword missing or empty; no completion call is made
    #[error("{}", KEYWORD_REQUIRED)]
    KeywordRequired,

    /// Model output was not valid JSON after fence stripping
    #[error("{}", PARSE_FAILURE)]
    UpstreamParse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// The completion call itself failed
    #[error("{}", GENERATION_FAILURE)]
    Transport(#[from] LlmError),
}

impl ApiError {
    fn error_type(&self) -> &'static str {
        match self {
            ApiError::KeywordRequired => "validation_error",
            ApiError::UpstreamParse { .. } => "upstream_parse_error",
            ApiError::Transport(_) => "transport_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::KeywordRequired => StatusCode::BAD_REQUEST,
            ApiError::UpstreamParse { .. } | ApiError::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::debug!(error_type = self.error_type(), "Returning error response");

        let body = ErrorResponse {
            error: self.to_string(),
            ai_response: match self {
                ApiError::UpstreamParse { raw, .. } => Some(raw.clone()),
                _ => None,
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
