//! HTTP transport for view-models.
//!
//! View-models only see the narrow [`HttpClient`] trait. Success means a
//! status in `[200, 300)`; anything else comes back as an [`ApiError`].

use async_trait::async_trait;
use contracts::shared::messages::ErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::shared::config::Messages;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    /// No response reached the client.
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid payload: {0}")]
    Payload(String),
}

impl ApiError {
    /// Text shown to the user in the notification banner.
    pub fn user_message(&self, messages: &Messages) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Network(_) => messages.network_error_message.clone(),
            ApiError::Rejected { message: None, .. } | ApiError::Payload(_) => {
                messages.unexpected_error_message.clone()
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Payload(err.to_string())
    }
}

impl From<serde_qs::Error> for ApiError {
    fn from(err: serde_qs::Error) -> Self {
        ApiError::Payload(err.to_string())
    }
}

#[async_trait(?Send)]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value, ApiError>;
    async fn post(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
    async fn put(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
    async fn delete(&self, url: &str) -> Result<Value, ApiError>;
}

const CSRF_META_SELECTOR: &str = "meta[name='csrf-token']";

/// Browser `fetch` client that tags every request as an AJAX call and
/// carries the page's anti-forgery token.
pub struct GlooHttpClient {
    csrf_token: String,
}

impl GlooHttpClient {
    pub fn new(csrf_token: impl Into<String>) -> Self {
        Self {
            csrf_token: csrf_token.into(),
        }
    }

    /// Read the token once from `<meta name="csrf-token">`.
    pub fn from_document() -> Self {
        let token = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(CSRF_META_SELECTOR).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));
        if token.is_none() {
            log::warn!("csrf-token meta tag not found, mutating requests will be rejected");
        }
        Self::new(token.unwrap_or_default())
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("X-Requested-With", "XMLHttpRequest")
            .header("X-CSRF-Token", &self.csrf_token)
    }

    async fn send_json(&self, builder: RequestBuilder, body: &Value) -> Result<Value, ApiError> {
        let request = self
            .prepare(builder)
            .json(body)
            .map_err(|e| ApiError::Payload(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let response = self
            .prepare(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }
}

async fn read_response(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = parse_body(&text);

    if response.ok() {
        body.map_err(ApiError::from)
    } else {
        let message = body
            .ok()
            .and_then(|value| ErrorBody::deserialize(&value).ok())
            .and_then(|b| b.error_message);
        Err(ApiError::Rejected { status, message })
    }
}

/// Empty bodies (e.g. `204 No Content`) decode as `null`.
fn parse_body(text: &str) -> Result<Value, serde_json::Error> {
    if text.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str(text)
    }
}

#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.send_empty(Request::get(url)).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.send_json(Request::post(url), body).await
    }

    async fn put(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.send_json(Request::put(url), body).await
    }

    async fn delete(&self, url: &str) -> Result<Value, ApiError> {
        self.send_empty(Request::delete(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_message_prefers_server_text() {
        let messages = Messages::default();
        let err = ApiError::Rejected {
            status: 400,
            message: Some("Email is required".into()),
        };
        assert_eq!(err.user_message(&messages), "Email is required");
    }

    #[test]
    fn test_user_message_without_response() {
        let messages = Messages::default();
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message(&messages), messages.network_error_message);
    }

    #[test]
    fn test_user_message_for_unreadable_failures() {
        let messages = Messages::default();
        let rejected = ApiError::Rejected {
            status: 502,
            message: None,
        };
        let payload = ApiError::Payload("expected value".into());
        assert_eq!(rejected.user_message(&messages), messages.unexpected_error_message);
        assert_eq!(payload.user_message(&messages), messages.unexpected_error_message);
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body("").unwrap(), Value::Null);
        assert_eq!(parse_body("  \n").unwrap(), Value::Null);
        assert_eq!(
            parse_body(r#"{"successMessage":"ok"}"#).unwrap(),
            json!({"successMessage": "ok"})
        );
        assert!(parse_body("<html>").is_err());
    }
}
