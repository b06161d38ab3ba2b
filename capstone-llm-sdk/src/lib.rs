//! # Capstone LLM SDK
//!
//! A small completion SDK: a provider-agnostic [`client::LlmClient`] trait and an
//! OpenAI Chat Completions client implementing it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use capstone_llm_sdk::client::LlmClient;
//! use capstone_llm_sdk::openai::OpenAIClient;
//! use capstone_llm_sdk::types::CompletionRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAIClient::new("your-api-key")?;
//!     let mut request = CompletionRequest::user_prompt("gpt-4o-mini", "Hello!", 100);
//!     request.temperature = Some(0.7);
//!
//!     let response = client.complete(request).await?;
//!     println!("Response: {}", response.joined_text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod openai;
pub mod providers;
pub mod types;

#[cfg(test)]
mod tests {
    use crate::client::LlmClient;
    use crate::openai::{types::OpenAIRole, OpenAIClient, OpenAIMessage};

    #[test]
    fn test_openai_client_creation() {
        let client = OpenAIClient::new("test-key");
        assert!(client.is_ok());
    }

    #[test]
    fn test_openai_client_creation_empty_key() {
        let client = OpenAIClient::new("");
        assert!(client.is_err());
    }

    #[test]
    fn test_openai_default_model() {
        let client = OpenAIClient::new("test-key").unwrap();
        assert_eq!(client.provider_name(), "openai");
        assert_eq!(client.model_name(), "gpt-4o-mini");

        let client = client.with_model("gpt-4o");
        assert_eq!(client.model_name(), "gpt-4o");
    }

    #[test]
    fn test_openai_message_creation() {
        let message = OpenAIMessage::user("Hello");
        assert_eq!(message.role, OpenAIRole::User);
        assert_eq!(message.content.as_deref(), Some("Hello"));
    }
}
