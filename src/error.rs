use thiserror::Error;

use crate::homework::{HomeworkError, ResponseError};
use crate::notifier::NotifyError;
use crate::redaction::authorization_for_log;

/// Everything that can end a poll cycle early. None of these stop the loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error(
        "сбой при запросе к {endpoint} с заголовком {} и параметрами from_date={from_date}: {reason}",
        authorization_for_log()
    )]
    Connectivity {
        endpoint: String,
        from_date: i64,
        reason: String,
    },
    #[error(
        "сбой при запросе к эндпоинту {endpoint}: {}, сервер ответил кодом {status}",
        .code.as_deref().unwrap_or("код ошибки не указан")
    )]
    EndpointStatus {
        endpoint: String,
        status: u16,
        code: Option<String>,
    },
    #[error(transparent)]
    MalformedResponse(#[from] ResponseError),
    #[error(transparent)]
    MalformedHomework(#[from] HomeworkError),
    #[error(transparent)]
    NotificationFailed(#[from] NotifyError),
}

impl CycleError {
    /// Text sent to the chat and compared for deduplication.
    pub fn diagnostic(&self) -> String {
        format!("Сбой в работе программы: {}", self)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CycleError::Connectivity { .. } => "connectivity",
            CycleError::EndpointStatus { .. } => "endpoint_status",
            CycleError::MalformedResponse(_) => "malformed_response",
            CycleError::MalformedHomework(_) => "malformed_homework",
            CycleError::NotificationFailed(_) => "notification_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::homework::ResponseError;

    use super::CycleError;

    #[test]
    fn endpoint_status_mentions_status_and_code() {
        let error = CycleError::EndpointStatus {
            endpoint: "https://example.com/api/".to_string(),
            status: 401,
            code: Some("not_authenticated".to_string()),
        };
        assert_eq!(
            error.diagnostic(),
            "Сбой в работе программы: сбой при запросе к эндпоинту https://example.com/api/: not_authenticated, сервер ответил кодом 401"
        );
    }

    #[test]
    fn endpoint_status_without_code_still_names_status() {
        let error = CycleError::EndpointStatus {
            endpoint: "https://example.com/api/".to_string(),
            status: 503,
            code: None,
        };
        assert!(error.to_string().contains("503"));
    }

    #[test]
    fn connectivity_message_hides_the_token() {
        let error = CycleError::Connectivity {
            endpoint: "https://example.com/api/".to_string(),
            from_date: 0,
            reason: "connection refused".to_string(),
        };
        let text = error.to_string();
        assert!(text.contains("OAuth [REDACTED]"));
        assert!(text.contains("from_date=0"));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn wrapped_errors_keep_their_text() {
        let error = CycleError::from(ResponseError::HomeworksNotAList);
        assert_eq!(error.to_string(), ResponseError::HomeworksNotAList.to_string());
        assert_eq!(error.kind(), "malformed_response");
    }
}
