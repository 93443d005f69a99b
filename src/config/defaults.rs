use super::schema::{Config, Credentials, LogSettings, StartFrom};

pub(super) fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

pub(super) fn default_retry_period_secs() -> u64 {
    600
}

pub(super) fn default_request_timeout_secs() -> u64 {
    30
}

pub(super) fn default_log_level() -> String {
    "homework_bot=debug,info".to_string()
}

pub(super) fn default_log_file() -> String {
    "homework_bot.log".to_string()
}

pub(super) fn default_log_max_file_size_bytes() -> u64 {
    10 * 1024 * 1024
}

pub(super) fn default_log_keep_files() -> u16 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            retry_period_secs: default_retry_period_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            start_from: StartFrom::default(),
            log: LogSettings::default(),
            credentials: Credentials::default(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
            max_file_size_bytes: default_log_max_file_size_bytes(),
            keep_files: default_log_keep_files(),
        }
    }
}
