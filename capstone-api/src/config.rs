use capstone_llm_sdk::models::openai::GPT_4O_MINI_ID;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the completion-service credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Ask the provider for a JSON object response instead of relying on the prompt alone
    pub json_mode: bool,
    /// Override for OpenAI-compatible endpoints
    pub base_url: Option<String>,
    /// Never written back out; filled from `OPENAI_API_KEY` when absent
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    /// `"*"` allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: GPT_4O_MINI_ID.to_string(),
            max_tokens: 600,
            temperature: 0.7,
            json_mode: false,
            base_url: None,
            api_key: None,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl ApiConfig {
    /// Load configuration from defaults, then the TOML file (if it exists), then
    /// `CAPSTONE__SECTION__KEY` environment variables.
    ///
    /// The API key is taken from `OPENAI_API_KEY` unless the file or
    /// `CAPSTONE__LLM__API_KEY` already set one. A missing key is not an error here.
    pub fn load(config_path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(get_config_path);

        let builder = Config::builder()
            .add_source(Config::try_from(&ApiConfig::default())?)
            .add_source(File::from(config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix("CAPSTONE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: ApiConfig = builder.try_deserialize()?;

        if config.llm.api_key.as_deref().map_or(true, str::is_empty) {
            config.llm.api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        }

        Ok((config, config_path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("capstone/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
