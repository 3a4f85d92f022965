//! Configuration types for AskDesk.
//!
//! `AppConfig` mirrors `config.toml`. Every field has a default so an empty or
//! missing file yields a working service with the model fallback disabled.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub model: ModelConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// SQLite location. `None` means `{data_dir}/askdesk.db`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

/// External completion service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Full URL of the chat completions endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable consulted first for the credential.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Inline credential, used only when the environment variable is unset.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_api_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f64 {
    0.6
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(config.storage.database_path.is_none());
        assert_eq!(config.model.model, "llama-3.1-8b-instant");
        assert_eq!(config.model.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.model.timeout_secs, 10);
        assert_eq!(config.model.max_tokens, 500);
        assert!((config.model.temperature - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_app_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_app_config_deserialize_partial_sections() {
        let toml_str = r#"
[server]
port = 8080

[storage]
database_path = "/tmp/askdesk.db"

[model]
model = "llama-3.3-70b-versatile"
api_key = "gsk-inline"
temperature = 0.2
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.storage.database_path,
            Some(PathBuf::from("/tmp/askdesk.db"))
        );
        assert_eq!(config.model.model, "llama-3.3-70b-versatile");
        assert_eq!(config.model.api_key.as_deref(), Some("gsk-inline"));
        assert_eq!(config.model.max_tokens, 500);
        assert!((config.model.temperature - 0.2).abs() < f64::EPSILON);
    }
}
