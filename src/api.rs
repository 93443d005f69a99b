use std::time::Duration;

use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde_json::Value;

use crate::error::CycleError;
use crate::homework::ResponseError;
use crate::redaction::{authorization_for_log, redact_secret};

/// Source of raw homework status payloads, newest changes since `from_date`.
pub trait StatusSource {
    async fn fetch_statuses(&mut self, from_date: i64) -> Result<Value, CycleError>;
}

pub struct PracticumClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: &str, token: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }

    fn connectivity(&self, from_date: i64, error: reqwest::Error) -> CycleError {
        CycleError::Connectivity {
            endpoint: self.endpoint.clone(),
            from_date,
            reason: redact_secret(&error.to_string(), &self.token),
        }
    }
}

impl StatusSource for PracticumClient {
    async fn fetch_statuses(&mut self, from_date: i64) -> Result<Value, CycleError> {
        log::debug!(
            "api_request url={} header=\"{}\" from_date={}",
            self.endpoint,
            authorization_for_log(),
            from_date
        );

        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|error| self.connectivity(from_date, error))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| self.connectivity(from_date, error))?;

        decode_reply(&self.endpoint, status, &body)
    }
}

fn decode_reply(endpoint: &str, status: StatusCode, body: &str) -> Result<Value, CycleError> {
    if status != StatusCode::OK {
        return Err(CycleError::EndpointStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            code: error_code(body),
        });
    }

    serde_json::from_str(body)
        .map_err(|error| CycleError::MalformedResponse(ResponseError::NotJson(error.to_string())))
}

fn error_code(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;
    match value.get("code")? {
        Value::String(code) => Some(code.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
pub(crate) struct MockStatusSource {
    replies: Vec<Result<Value, CycleError>>,
    pub(crate) requested: Vec<i64>,
}

#[cfg(test)]
impl MockStatusSource {
    pub(crate) fn new(replies: Vec<Result<Value, CycleError>>) -> Self {
        Self {
            replies,
            requested: Vec::new(),
        }
    }
}

#[cfg(test)]
impl StatusSource for MockStatusSource {
    async fn fetch_statuses(&mut self, from_date: i64) -> Result<Value, CycleError> {
        self.requested.push(from_date);
        if self.replies.is_empty() {
            return Err(CycleError::Connectivity {
                endpoint: "mock".to_string(),
                from_date,
                reason: "mock replies exhausted".to_string(),
            });
        }

        self.replies.remove(0)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::error::CycleError;
    use crate::homework::ResponseError;

    use super::decode_reply;

    const ENDPOINT: &str = "https://example.com/api/";

    #[test]
    fn ok_reply_is_decoded() {
        let value = decode_reply(ENDPOINT, StatusCode::OK, r#"{"homeworks": [], "current_date": 5}"#)
            .expect("body should decode");
        assert_eq!(value, json!({"homeworks": [], "current_date": 5}));
    }

    #[test]
    fn non_ok_reply_carries_status_and_code() {
        let error = decode_reply(
            ENDPOINT,
            StatusCode::BAD_REQUEST,
            r#"{"code": "UnknownError", "error": {"error": "Wrong from_date format"}}"#,
        )
        .unwrap_err();

        assert_eq!(
            error,
            CycleError::EndpointStatus {
                endpoint: ENDPOINT.to_string(),
                status: 400,
                code: Some("UnknownError".to_string()),
            }
        );
    }

    #[test]
    fn non_ok_reply_without_json_has_no_code() {
        let error =
            decode_reply(ENDPOINT, StatusCode::SERVICE_UNAVAILABLE, "<html>down</html>").unwrap_err();

        assert_eq!(
            error,
            CycleError::EndpointStatus {
                endpoint: ENDPOINT.to_string(),
                status: 503,
                code: None,
            }
        );
    }

    #[test]
    fn ok_reply_with_garbage_is_malformed() {
        let error = decode_reply(ENDPOINT, StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(
            error,
            CycleError::MalformedResponse(ResponseError::NotJson(_))
        ));
    }
}
