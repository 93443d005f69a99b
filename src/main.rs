mod api;
mod config;
mod error;
mod homework;
mod logging;
mod notifier;
mod poller;
mod redaction;

use std::process::ExitCode;
use std::time::Duration;

use chrono::Utc;

use crate::api::PracticumClient;
use crate::config::{Config, ConfigError, StartFrom, load_config};
use crate::logging::init_logging;
use crate::notifier::TelegramNotifier;
use crate::poller::{PollState, Poller};

const CONFIG_PATH_VAR: &str = "HOMEWORK_BOT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn config_path() -> String {
    std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

fn initial_cursor(start_from: StartFrom) -> i64 {
    match start_from {
        StartFrom::Zero => 0,
        StartFrom::Now => Utc::now().timestamp(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let path = config_path();
    let loaded = load_config(&path);
    init_logging(loaded.as_ref().ok().map(|config| &config.log));

    let config: Config = match loaded {
        Ok(config) => config,
        Err(error) => {
            log::error!("Configuration error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let credentials = match config.credentials.resolve() {
        Ok(credentials) => credentials,
        Err(ConfigError::MissingCredentials(names)) => {
            for name in names {
                log::error!("CRITICAL: missing credential {}", name);
            }
            log::error!("CRITICAL: startup aborted, credentials are required");
            return ExitCode::FAILURE;
        }
        Err(error) => {
            log::error!("CRITICAL: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let recipient = match credentials.recipient() {
        Ok(recipient) => recipient,
        Err(error) => {
            log::error!("CRITICAL: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let client = match PracticumClient::new(
        &config.endpoint,
        &credentials.practicum_token,
        Duration::from_secs(config.request_timeout_secs),
    ) {
        Ok(client) => client,
        Err(error) => {
            log::error!("CRITICAL: failed to build HTTP client: {}", error);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Homework status bot is starting... config={}", path);
    let notifier = TelegramNotifier::new(&credentials.telegram_token, recipient);
    let state = PollState::starting_at(initial_cursor(config.start_from));

    Poller::new(
        client,
        notifier,
        state,
        Duration::from_secs(config.retry_period_secs),
    )
    .run()
    .await;

    ExitCode::SUCCESS
}
