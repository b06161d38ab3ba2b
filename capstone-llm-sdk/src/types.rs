use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User message
    User,
    /// Assistant message
    Assistant,
    /// System message
    System,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::System => write!(f, "system"),
        }
    }
}

/// Content block of a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentBlock {
    /// Text content
    Text { text: String },
}

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,
    /// Content of the message
    pub content: Vec<ContentBlock>,
}

impl Message {
    /// Create a new text message
    pub fn text<S: Into<String>>(role: Role, text: S) -> Self {
        Self {
            role,
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Create a user message with text content
    pub fn user<S: Into<String>>(text: S) -> Self {
        Self::text(Role::User, text)
    }

    /// Create an assistant message with text content
    pub fn assistant<S: Into<String>>(text: S) -> Self {
        Self::text(Role::Assistant, text)
    }

    /// Create a system message with text content
    pub fn system<S: Into<String>>(text: S) -> Self {
        Self::text(Role::System, text)
    }

    /// Concatenated text of all content blocks
    pub fn joined_text(&self) -> String {
        join_text(&self.content)
    }
}

/// Token usage information
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage {
    /// Number of tokens in the input prompt
    pub input_tokens: u32,
    /// Number of tokens in the output completion
    pub output_tokens: u32,
}

/// Response format type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Plain text response
    Text,
    /// JSON object response
    JsonObject,
}

/// Generic completion request (provider-agnostic)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Messages for the conversation
    pub messages: Vec<Message>,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Model to use (provider-specific)
    pub model: String,
    /// Optional system message
    pub system: Option<String>,
    /// Temperature for randomness
    pub temperature: Option<f32>,
    /// Top-p sampling parameter
    pub top_p: Option<f32>,
    /// Stop sequences
    pub stop_sequences: Option<Vec<String>>,
    /// Response format (text or JSON object)
    pub response_format: Option<ResponseFormat>,
}

impl CompletionRequest {
    /// Single-turn request carrying one user prompt
    pub fn user_prompt(model: impl Into<String>, prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            messages: vec![Message::user(prompt)],
            max_tokens,
            model: model.into(),
            system: None,
            temperature: None,
            top_p: None,
            stop_sequences: None,
            response_format: None,
        }
    }
}

/// Generic completion response (provider-agnostic)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated content
    pub content: Vec<ContentBlock>,
    /// Role of the response
    pub role: Role,
    /// Token usage information
    pub usage: Usage,
    /// Stop reason
    pub stop_reason: Option<String>,
}

impl CompletionResponse {
    /// Assistant response holding a single text block
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
            role: Role::Assistant,
            usage: Usage::default(),
            stop_reason: None,
        }
    }

    /// Concatenated text of all content blocks
    pub fn joined_text(&self) -> String {
        join_text(&self.content)
    }
}

fn join_text(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            ContentBlock::Text { text } => text.as_str(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_request() {
        let request = CompletionRequest::user_prompt("gpt-4o-mini", "Hello", 600);
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.max_tokens, 600);
        assert_eq!(request.messages, vec![Message::user("Hello")]);
        assert!(request.temperature.is_none());
    }

    #[test]
    fn test_joined_text_concatenates_blocks() {
        let response = CompletionResponse {
            content: vec![
                ContentBlock::Text {
                    text: "{\"title\":".to_string(),
                },
                ContentBlock::Text {
                    text: "\"X\"}".to_string(),
                },
            ],
            role: Role::Assistant,
            usage: Usage::default(),
            stop_reason: Some("stop".to_string()),
        };
        assert_eq!(response.joined_text(), "{\"title\":\"X\"}");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::System.to_string(), "system");
        assert_eq!(Role::User.to_string(), "user");
    }
}
