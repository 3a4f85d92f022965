//! Configuration loader for AskDesk.
//!
//! Reads `config.toml` from the data directory (`./instance` unless
//! `ASKDESK_DATA_DIR` is set) and deserializes it into [`AppConfig`]. Falls
//! back to defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use askdesk_types::config::{AppConfig, ModelConfig};
use askdesk_types::error::ConfigError;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ASKDESK_DATA_DIR";

/// Default database file name inside the data directory.
pub const DATABASE_FILE: &str = "askdesk.db";

/// Resolve the data directory.
///
/// Priority:
/// 1. `ASKDESK_DATA_DIR` environment variable
/// 2. `./instance`
pub fn resolve_data_dir() -> PathBuf {
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("instance"),
    }
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    match load_config_file(&config_path).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            AppConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            AppConfig::default()
        }
    }
}

/// Load an explicitly requested configuration file.
///
/// Unlike [`load_config`], a missing or malformed file is an error.
pub async fn load_config_strict(path: &Path) -> Result<AppConfig, ConfigError> {
    load_config_file(path).await?.ok_or_else(|| ConfigError::Read {
        path: path.display().to_string(),
        message: "file not found".to_string(),
    })
}

async fn load_config_file(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    toml::from_str::<AppConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })
}

/// Path of the SQLite file: the configured path, else `{data_dir}/askdesk.db`.
pub fn database_path(config: &AppConfig, data_dir: &Path) -> PathBuf {
    config
        .storage
        .database_path
        .clone()
        .unwrap_or_else(|| data_dir.join(DATABASE_FILE))
}

/// Resolve the model credential from the process environment and `config`.
pub fn resolve_api_key(config: &ModelConfig) -> Option<SecretString> {
    resolve_api_key_with(config, |name| std::env::var(name).ok())
}

/// Resolve the model credential using `lookup` for environment access.
///
/// The variable named by `api_key_env` wins over the inline `api_key`.
/// Blank values count as absent.
pub fn resolve_api_key_with<F>(config: &ModelConfig, lookup: F) -> Option<SecretString>
where
    F: Fn(&str) -> Option<String>,
{
    let from_env = lookup(&config.api_key_env).filter(|v| !v.trim().is_empty());
    let inline = config
        .api_key
        .clone()
        .filter(|v| !v.trim().is_empty());

    from_env
        .or(inline)
        .map(|key| SecretString::from(key.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
[server]
host = "127.0.0.1"
port = 8088

[model]
timeout_secs = 3
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.model.timeout_secs, 3);
        assert_eq!(config.model.model, "llama-3.1-8b-instant");
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn load_config_strict_errors() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        assert!(matches!(
            load_config_strict(&missing).await,
            Err(ConfigError::Read { .. })
        ));

        let bad = tmp.path().join("bad.toml");
        tokio::fs::write(&bad, "[server\nport = ").await.unwrap();
        assert!(matches!(
            load_config_strict(&bad).await,
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn database_path_defaults_to_data_dir() {
        let config = AppConfig::default();
        assert_eq!(
            database_path(&config, Path::new("/srv/askdesk")),
            PathBuf::from("/srv/askdesk/askdesk.db")
        );
    }

    #[test]
    fn database_path_uses_configured_path() {
        let mut config = AppConfig::default();
        config.storage.database_path = Some(PathBuf::from("/tmp/other.db"));
        assert_eq!(
            database_path(&config, Path::new("/srv/askdesk")),
            PathBuf::from("/tmp/other.db")
        );
    }

    #[test]
    fn resolve_api_key_prefers_env() {
        let config = ModelConfig {
            api_key: Some("inline-key".to_string()),
            ..ModelConfig::default()
        };
        let key = resolve_api_key_with(&config, |name| {
            (name == "GROQ_API_KEY").then(|| "env-key".to_string())
        })
        .unwrap();
        assert_eq!(key.expose_secret(), "env-key");
    }

    #[test]
    fn resolve_api_key_falls_back_to_inline() {
        let config = ModelConfig {
            api_key: Some("inline-key".to_string()),
            ..ModelConfig::default()
        };
        let key = resolve_api_key_with(&config, |_| None).unwrap();
        assert_eq!(key.expose_secret(), "inline-key");
    }

    #[test]
    fn resolve_api_key_blank_values_are_absent() {
        let config = ModelConfig {
            api_key: Some("   ".to_string()),
            ..ModelConfig::default()
        };
        assert!(resolve_api_key_with(&config, |_| Some(String::new())).is_none());
        assert!(resolve_api_key_with(&ModelConfig::default(), |_| None).is_none());
    }
}
