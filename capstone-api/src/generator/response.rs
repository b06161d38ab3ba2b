use crate::error::ApiError;
use serde_json::Value;

/// Remove markdown code-fence markers the model may wrap its answer in.
///
/// Every ```` ```json ```` and ```` ``` ```` occurrence is dropped, wherever it
/// appears, and the result is trimmed.
pub fn strip_code_fences(text: &str) -> String {
    text.trim()
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Strictly parse cleaned model output. The value is returned as-is, without
/// checking it against the project shape.
pub fn parse_project(cleaned: &str) -> Result<Value, ApiError> {
    serde_json::from_str(cleaned).map_err(|source| ApiError::UpstreamParse {
        raw: cleaned.to_string(),
        source,
    })
}
