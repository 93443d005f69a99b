use std::sync::Mutex;

use file_rotate::{ContentLimit, FileRotate, compression::Compression, suffix::AppendCount};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

use crate::config::LogSettings;

const FALLBACK_LEVEL: &str = "info";

/// Installs the global subscriber. Without settings only stdout is used.
pub fn init_logging(settings: Option<&LogSettings>) {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let level = settings
        .map(|settings| settings.level.as_str())
        .unwrap_or(FALLBACK_LEVEL);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(false)
        .with_span_list(false);

    let file_layer = settings
        .filter(|settings| !settings.file.trim().is_empty())
        .map(|settings| {
            let writer = rotating_writer(settings);
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_ansi(false)
                .with_writer(Mutex::new(writer))
        });

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer);

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

fn rotating_writer(settings: &LogSettings) -> FileRotate<AppendCount> {
    let max_bytes = usize::try_from(settings.max_file_size_bytes).unwrap_or(usize::MAX);
    FileRotate::new(
        &settings.file,
        AppendCount::new(settings.keep_files as usize),
        ContentLimit::BytesSurpassed(max_bytes),
        Compression::None,
        None,
    )
}
