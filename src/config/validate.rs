use reqwest::Url;
use teloxide::types::{ChatId, Recipient};
use thiserror::Error;

use super::io::{PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR, TELEGRAM_TOKEN_VAR};
use super::schema::{Config, Credentials, ResolvedCredentials};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("failed to read env file {path}: {source}")]
    Dotenv {
        path: String,
        source: dotenvy::Error,
    },
    #[error("invalid config: {0}")]
    Validation(String),
    #[error("missing credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation(
                "endpoint must not be empty".to_string(),
            ));
        }
        match Url::parse(&self.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::Validation(format!(
                    "endpoint must use http or https, got {}",
                    url.scheme()
                )));
            }
            Err(error) => {
                return Err(ConfigError::Validation(format!(
                    "endpoint is not a valid URL: {}",
                    error
                )));
            }
        }
        if self.retry_period_secs == 0 {
            return Err(ConfigError::Validation(
                "retry_period_secs must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.log.max_file_size_bytes == 0 {
            return Err(ConfigError::Validation(
                "log.max_file_size_bytes must be greater than 0".to_string(),
            ));
        }
        if self.log.keep_files == 0 {
            return Err(ConfigError::Validation(
                "log.keep_files must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Credentials {
    /// Names of the credentials that are absent or blank, in a stable order.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (PRACTICUM_TOKEN_VAR, &self.practicum_token),
            (TELEGRAM_TOKEN_VAR, &self.telegram_token),
            (TELEGRAM_CHAT_ID_VAR, &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| non_blank(value).is_none())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn resolve(&self) -> Result<ResolvedCredentials, ConfigError> {
        match (
            non_blank(&self.practicum_token),
            non_blank(&self.telegram_token),
            non_blank(&self.telegram_chat_id),
        ) {
            (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) => {
                Ok(ResolvedCredentials {
                    practicum_token: practicum_token.to_string(),
                    telegram_token: telegram_token.to_string(),
                    telegram_chat_id: telegram_chat_id.to_string(),
                })
            }
            _ => Err(ConfigError::MissingCredentials(self.missing())),
        }
    }
}

impl ResolvedCredentials {
    pub fn recipient(&self) -> Result<Recipient, ConfigError> {
        let chat_id = self.telegram_chat_id.trim();
        if let Ok(id) = chat_id.parse::<i64>() {
            return Ok(Recipient::Id(ChatId(id)));
        }
        if chat_id.len() > 1 && chat_id.starts_with('@') {
            return Ok(Recipient::ChannelUsername(chat_id.to_string()));
        }
        Err(ConfigError::Validation(format!(
            "{} must be a numeric chat id or an @channel name",
            TELEGRAM_CHAT_ID_VAR
        )))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
