use serde::Deserialize;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_retry_period_secs")]
    pub retry_period_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub start_from: StartFrom,
    #[serde(default)]
    pub log: LogSettings,
    #[serde(default)]
    pub credentials: Credentials,
}

/// Where the poll cursor points on the first cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartFrom {
    #[default]
    Zero,
    Now,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_max_file_size_bytes")]
    pub max_file_size_bytes: u64,
    #[serde(default = "default_log_keep_files")]
    pub keep_files: u16,
}

/// Raw credentials as read from the config file and environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub practicum_token: Option<String>,
    #[serde(default)]
    pub telegram_token: Option<String>,
    #[serde(default)]
    pub telegram_chat_id: Option<String>,
}

/// Credentials after the startup check: every value is present and non-blank.
#[derive(Debug, Clone)]
pub struct ResolvedCredentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}
