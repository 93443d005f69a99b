use std::collections::HashMap;
use std::path::Path;

use super::{schema::Config, validate::ConfigError};

pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
pub const LEGACY_PRACTICUM_TOKEN_VAR: &str = "TOKEN";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";
pub const DOTENV_PATH: &str = ".env";

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let dotenv = read_dotenv(DOTENV_PATH)?;
    load_config_with_env(
        path,
        with_dotenv_fallback(|key| std::env::var(key).ok(), dotenv),
    )
}

/// Variables from a `.env` file; a missing file yields none.
pub(super) fn read_dotenv(path: impl AsRef<Path>) -> Result<HashMap<String, String>, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(HashMap::new());
    }

    dotenvy::from_path_iter(path)
        .and_then(|entries| entries.collect())
        .map_err(|source| ConfigError::Dotenv {
            path: path.display().to_string(),
            source,
        })
}

/// Process variables win; blank ones fall through to the `.env` values.
pub(super) fn with_dotenv_fallback(
    env: impl Fn(&str) -> Option<String>,
    dotenv: HashMap<String, String>,
) -> impl Fn(&str) -> Option<String> {
    move |key: &str| {
        env(key)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| dotenv.get(key).cloned())
    }
}

pub(super) fn load_config_with_env(
    path: impl AsRef<Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let mut config = if path.exists() {
        let path_str = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path_str.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path_str,
            source,
        })?
    } else {
        Config::default()
    };

    apply_env_overrides(&mut config, env);
    config.validate()?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config, env: impl Fn(&str) -> Option<String>) {
    let present = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    if let Some(token) = present(PRACTICUM_TOKEN_VAR).or_else(|| present(LEGACY_PRACTICUM_TOKEN_VAR)) {
        config.credentials.practicum_token = Some(token);
    }
    if let Some(token) = present(TELEGRAM_TOKEN_VAR) {
        config.credentials.telegram_token = Some(token);
    }
    if let Some(chat_id) = present(TELEGRAM_CHAT_ID_VAR) {
        config.credentials.telegram_chat_id = Some(chat_id);
    }
}
