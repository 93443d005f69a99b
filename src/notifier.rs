use teloxide::prelude::*;
use teloxide::types::Recipient;
use thiserror::Error;

use crate::redaction::redact_secret;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("сбой при отправке сообщения в Telegram: {message}")]
pub struct NotifyError {
    message: String,
}

impl NotifyError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Delivers one text message. Exactly one attempt per call, no retries.
pub trait Notifier {
    async fn send(&mut self, text: &str) -> Result<(), NotifyError>;
}

pub struct TelegramNotifier {
    bot: Bot,
    recipient: Recipient,
    bot_token: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: &str, recipient: Recipient) -> Self {
        Self {
            bot: Bot::new(bot_token),
            recipient,
            bot_token: bot_token.to_string(),
        }
    }
}

impl Notifier for TelegramNotifier {
    async fn send(&mut self, text: &str) -> Result<(), NotifyError> {
        log::debug!("telegram_send_attempt recipient={:?}", self.recipient);
        match self.bot.send_message(self.recipient.clone(), text).await {
            Ok(_) => {
                log::debug!("telegram_send_ok chars={}", text.chars().count());
                Ok(())
            }
            // Request errors may echo the API URL, which embeds the bot token.
            Err(error) => Err(NotifyError::new(redact_secret(
                &error.to_string(),
                &self.bot_token,
            ))),
        }
    }
}

#[cfg(test)]
pub(crate) struct MockNotifier {
    pub(crate) sent: Vec<String>,
    failures: Vec<bool>,
}

#[cfg(test)]
impl MockNotifier {
    pub(crate) fn new() -> Self {
        Self {
            sent: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Makes the next calls fail or succeed in order; afterwards every call succeeds.
    pub(crate) fn failing_with(failures: Vec<bool>) -> Self {
        Self {
            sent: Vec::new(),
            failures,
        }
    }
}

#[cfg(test)]
impl Notifier for MockNotifier {
    async fn send(&mut self, text: &str) -> Result<(), NotifyError> {
        let fail = if self.failures.is_empty() {
            false
        } else {
            self.failures.remove(0)
        };
        if fail {
            return Err(NotifyError::new("mock delivery failure"));
        }

        self.sent.push(text.to_string());
        Ok(())
    }
}
