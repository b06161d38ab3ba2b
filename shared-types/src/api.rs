use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body of `POST /api/generate`.
///
/// Both fields are optional on the wire so a missing keyword reaches the
/// handler and is reported as "Keyword required" instead of a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenerateProjectRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,
}

impl GenerateProjectRequest {
    pub fn new(keyword: impl Into<String>, category: Option<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
    /// Raw model output, present only when it could not be parsed as JSON
    #[serde(
        rename = "aiResponse",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(rename = "aiResponse", optional)]
    pub ai_response: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            ai_response: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
