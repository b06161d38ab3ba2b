//! Model constants for supported LLM providers

/// OpenAI model constants
pub mod openai {
    /// GPT-4o Mini, the default generation model
    pub const GPT_4O_MINI_ID: &str = "gpt-4o-mini";
}
